//! Colors and layout constraints for the dashboard.

use swm_data::model::SensorStatus;

use crate::state::{Theme, Viewport};

/// Theme-dependent colors shared by the RSX components and the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page_background: &'static str,
    pub page_text: &'static str,
    pub card_background: &'static str,
    pub muted_text: &'static str,
    pub chart_grid: &'static str,
    pub chart_axis: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_text: &'static str,
    pub alert_background: &'static str,
    pub alert_title: &'static str,
    pub alert_meta: &'static str,
    pub tip_background: &'static str,
    pub tip_title: &'static str,
    pub tip_meta: &'static str,
}

const LIGHT: Palette = Palette {
    page_background: "#F9FAFB",
    page_text: "#111827",
    card_background: "#FFFFFF",
    muted_text: "#6B7280",
    chart_grid: "#e5e7eb",
    chart_axis: "#4B5563",
    tooltip_background: "#FFFFFF",
    tooltip_text: "#111827",
    alert_background: "#FEFCE8",
    alert_title: "#854D0E",
    alert_meta: "#CA8A04",
    tip_background: "#F0FDF4",
    tip_title: "#166534",
    tip_meta: "#16A34A",
};

const DARK: Palette = Palette {
    page_background: "#111827",
    page_text: "#FFFFFF",
    card_background: "#1F2937",
    muted_text: "#9CA3AF",
    chart_grid: "#374151",
    chart_axis: "#9CA3AF",
    tooltip_background: "#1F2937",
    tooltip_text: "#F3F4F6",
    alert_background: "rgba(113, 63, 18, 0.3)",
    alert_title: "#FEF08A",
    alert_meta: "#FDE047",
    tip_background: "rgba(20, 83, 45, 0.3)",
    tip_title: "#BBF7D0",
    tip_meta: "#86EFAC",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

/// Accent used for the active tab, brand mark and primary buttons.
pub const ACCENT: &str = "#3B82F6";

/// Maximum content width for a viewport mode.
pub fn max_content_width(viewport: Viewport) -> &'static str {
    match viewport {
        Viewport::Desktop => "80rem",
        Viewport::Mobile => "28rem",
    }
}

/// Direction of today's usage against yesterday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Decrease,
    Increase,
}

impl Trend {
    /// A negative change is a decrease; zero counts as an increase.
    pub fn of(percent_change: f64) -> Trend {
        if percent_change < 0.0 {
            Trend::Decrease
        } else {
            Trend::Increase
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Trend::Decrease => "trend-decrease",
            Trend::Increase => "trend-increase",
        }
    }

    /// Less water used reads as good news.
    pub fn color(self) -> &'static str {
        match self {
            Trend::Decrease => "#22C55E",
            Trend::Increase => "#EF4444",
        }
    }
}

/// Indicator treatment for a sensor status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub class: &'static str,
    pub color: &'static str,
}

/// Green for normal, yellow for warning, red for critical. Anything else
/// gets a neutral gray.
pub fn status_style(status: &SensorStatus) -> StatusStyle {
    match status {
        SensorStatus::Normal => StatusStyle {
            class: "status-normal",
            color: "#22C55E",
        },
        SensorStatus::Warning => StatusStyle {
            class: "status-warning",
            color: "#EAB308",
        },
        SensorStatus::Critical => StatusStyle {
            class: "status-critical",
            color: "#EF4444",
        },
        SensorStatus::Other(_) => StatusStyle {
            class: "status-unknown",
            color: "#9CA3AF",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_classes() {
        assert_eq!(Trend::of(-6.25), Trend::Decrease);
        assert_eq!(Trend::of(-6.25).class(), "trend-decrease");
        assert_eq!(Trend::of(3.5).class(), "trend-increase");
        assert_eq!(Trend::of(0.0), Trend::Increase);
    }

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_style(&SensorStatus::Normal).color, "#22C55E");
        assert_eq!(status_style(&SensorStatus::Warning).color, "#EAB308");
        assert_eq!(status_style(&SensorStatus::Critical).class, "status-critical");
    }

    #[test]
    fn test_unrecognized_status_is_neutral() {
        let style = status_style(&SensorStatus::from("degraded"));
        assert_eq!(style.class, "status-unknown");
        assert_eq!(style.color, "#9CA3AF");
    }

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(Palette::for_theme(Theme::Light).chart_grid, "#e5e7eb");
        assert_eq!(Palette::for_theme(Theme::Dark).chart_grid, "#374151");
        assert_eq!(Palette::for_theme(Theme::Dark).tooltip_text, "#F3F4F6");
    }

    #[test]
    fn test_viewport_widths() {
        assert_eq!(max_content_width(Viewport::Mobile), "28rem");
        assert_eq!(max_content_width(Viewport::Desktop), "80rem");
    }
}
