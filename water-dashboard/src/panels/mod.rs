//! Content panels, one per tab.

mod analytics;
mod overview;
mod sensors;

use dioxus::prelude::*;
use swm_view::state::Tab;

use analytics::AnalyticsPanel;
use overview::OverviewPanel;
use sensors::SensorsPanel;

/// Builds the panel for `tab` and nothing else.
#[component]
pub fn ActivePanel(tab: Tab) -> Element {
    match tab {
        Tab::Overview => rsx! { OverviewPanel {} },
        Tab::Sensors => rsx! { SensorsPanel {} },
        Tab::Analytics => rsx! { AnalyticsPanel {} },
    }
}
