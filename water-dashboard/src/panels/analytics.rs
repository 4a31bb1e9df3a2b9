//! Analytics panel: actual against predicted usage.

use dioxus::prelude::*;
use swm_ui::components::{Card, ChartContainer};
use swm_ui::js_bridge;
use swm_ui::state::AppState;
use swm_view::chart::forecast_chart;

/// DOM id for the D3 chart container div.
const FORECAST_CHART_ID: &str = "usage-forecast-chart";

#[component]
pub fn AnalyticsPanel() -> Element {
    let state = use_context::<AppState>();

    // Re-render the chart whenever the theme or data changes.
    use_effect(move || {
        let theme = state.view.read().theme();
        let Some(data) = state.data.read().clone() else {
            return;
        };
        js_bridge::render_chart(FORECAST_CHART_ID, &forecast_chart(&data.forecast, theme));
    });
    use_drop(|| js_bridge::destroy_chart(FORECAST_CHART_ID));

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1fr; gap: 24px;",
            Card {
                title: "Predictive Analysis".to_string(),
                ChartContainer {
                    id: FORECAST_CHART_ID.to_string(),
                    min_height: 384,
                }
            }
        }
    }
}
