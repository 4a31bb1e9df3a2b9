//! Sensors panel: one card per reading.

use dioxus::prelude::*;
use swm_data::model::SensorReading;
use swm_ui::components::StatusIndicator;
use swm_ui::state::AppState;
use swm_view::style::Palette;

#[component]
pub fn SensorsPanel() -> Element {
    let state = use_context::<AppState>();
    let Some(data) = state.data.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 24px;",
            for sensor in data.sensors {
                SensorCard { key: "{sensor.id}", sensor: sensor.clone() }
            }
        }
    }
}

#[component]
fn SensorCard(sensor: SensorReading) -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme(state.view.read().theme());
    let label = sensor.kind.label();

    rsx! {
        div {
            style: "background: {palette.card_background}; padding: 24px; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                h3 { style: "margin: 0; font-size: 18px; font-weight: 500;", "{label}" }
                StatusIndicator { status: sensor.status.clone() }
            }
            div { style: "font-size: 30px; font-weight: 700;", "{sensor.value}" }
            div { style: "font-size: 14px; color: {palette.muted_text};", "{sensor.location}" }
        }
    }
}
