//! Startup configuration for the dashboard.

use serde::{Deserialize, Serialize};
use swm_data::format::ClockFormat;
use swm_data::model::Identity;

use crate::state::{Tab, Theme, Viewport};

/// How long a notice stays on screen, in milliseconds.
pub const DEFAULT_NOTICE_DURATION_MS: u32 = 2000;

/// Initial view state and display settings. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub theme: Theme,
    pub viewport: Viewport,
    pub tab: Tab,
    /// Identity the demo login assigns.
    pub demo_identity: Identity,
    pub notice_duration_ms: u32,
    pub clock_format: ClockFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            viewport: Viewport::default(),
            tab: Tab::default(),
            demo_identity: Identity::demo(),
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            clock_format: ClockFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.viewport, Viewport::Desktop);
        assert_eq!(config.tab, Tab::Overview);
        assert_eq!(config.notice_duration_ms, 2000);
        assert_eq!(config.clock_format, ClockFormat::TwelveHour);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"theme": "dark", "clock_format": "twenty_four_hour"}"#)
                .unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.clock_format, ClockFormat::TwentyFourHour);
        assert_eq!(config.demo_identity, Identity::demo());
        assert_eq!(config.tab, Tab::Overview);
    }
}
