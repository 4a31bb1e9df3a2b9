//! Overview panel: usage, quality, device breakdown, weekly trend, alerts
//! and recommendations.

use dioxus::prelude::*;
use swm_data::format::clock_time;
use swm_ui::components::{Card, ChartContainer, StatRow};
use swm_ui::js_bridge;
use swm_ui::state::AppState;
use swm_view::chart::{device_usage_chart, weekly_trend_chart};
use swm_view::style::{Palette, Trend};

/// DOM ids for the D3 chart container divs.
const DEVICE_CHART_ID: &str = "device-usage-chart";
const WEEKLY_CHART_ID: &str = "weekly-usage-chart";

#[component]
pub fn OverviewPanel() -> Element {
    let state = use_context::<AppState>();

    // Re-render both charts whenever the theme or data changes.
    use_effect(move || {
        let theme = state.view.read().theme();
        let Some(data) = state.data.read().clone() else {
            return;
        };
        js_bridge::render_chart(DEVICE_CHART_ID, &device_usage_chart(&data.devices, theme));
        js_bridge::render_chart(WEEKLY_CHART_ID, &weekly_trend_chart(&data.weekly, theme));
    });
    use_drop(|| {
        js_bridge::destroy_chart(DEVICE_CHART_ID);
        js_bridge::destroy_chart(WEEKLY_CHART_ID);
    });

    let Some(data) = state.data.read().clone() else {
        return rsx! {};
    };
    let clock = state.config.read().clock_format;
    let palette = Palette::for_theme(state.view.read().theme());

    let usage = data.usage;
    let trend = Trend::of(usage.percent_change);
    let (trend_class, trend_color) = (trend.class(), trend.color());

    let quality = data.quality;
    let last_updated = clock_time(&quality.last_updated, clock);

    let alerts: Vec<(String, String, String)> = data
        .alerts
        .iter()
        .map(|a| (a.id.clone(), a.message.clone(), clock_time(&a.timestamp, clock)))
        .collect();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 24px;",

            Card {
                title: "Daily Usage".to_string(),
                icon: "⏱".to_string(),
                div { style: "font-size: 30px; font-weight: 700;", "{usage.daily_liters} L" }
                div {
                    class: "{trend_class}",
                    style: "font-size: 14px; color: {trend_color};",
                    "{usage.percent_change}% vs yesterday"
                }
                div {
                    style: "margin-top: 16px; display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; text-align: center;",
                    UsageFigure { label: "Weekly".to_string(), liters: usage.weekly_liters }
                    UsageFigure { label: "Monthly".to_string(), liters: usage.monthly_liters }
                    UsageFigure { label: "Yearly Avg".to_string(), liters: usage.yearly_average_liters }
                }
            }

            Card {
                title: "Water Quality".to_string(),
                icon: "💧".to_string(),
                div {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    StatRow { label: "pH Level".to_string(), value: format!("{}", quality.ph) }
                    StatRow { label: "Turbidity".to_string(), value: format!("{} NTU", quality.turbidity) }
                    StatRow { label: "Chlorine".to_string(), value: format!("{} mg/L", quality.chlorine_mg_per_l) }
                    StatRow { label: "Temperature".to_string(), value: format!("{}°C", quality.temperature_c) }
                }
                div {
                    style: "margin-top: 16px; font-size: 12px; color: {palette.muted_text};",
                    "Last updated: {last_updated}"
                }
            }

            Card {
                title: "Usage by Device".to_string(),
                icon: "🚿".to_string(),
                ChartContainer { id: DEVICE_CHART_ID.to_string(), min_height: 256 }
            }

            Card {
                title: "Weekly Usage Trend".to_string(),
                wide: true,
                ChartContainer { id: WEEKLY_CHART_ID.to_string(), min_height: 320 }
            }

            Card {
                title: "Active Alerts".to_string(),
                icon: "⚠".to_string(),
                icon_color: "#EAB308".to_string(),
                for (id, message, time) in alerts {
                    div {
                        key: "{id}",
                        style: "margin-bottom: 8px; padding: 12px; border-radius: 6px; background: {palette.alert_background};",
                        div { style: "font-weight: 500; color: {palette.alert_title};", "{message}" }
                        div { style: "font-size: 14px; color: {palette.alert_meta};", "{time}" }
                    }
                }
            }

            Card {
                title: "Recommendations".to_string(),
                icon: "📈".to_string(),
                icon_color: "#22C55E".to_string(),
                for rec in data.recommendations {
                    div {
                        key: "{rec.id}",
                        style: "margin-bottom: 8px; padding: 12px; border-radius: 6px; background: {palette.tip_background};",
                        title: "{rec.description}",
                        div { style: "font-weight: 500; color: {palette.tip_title};", "{rec.title}" }
                        div {
                            style: "font-size: 14px; color: {palette.tip_meta};",
                            "Potential savings: {rec.potential_savings_liters}L/year"
                        }
                    }
                }
            }
        }
    }
}

/// Small caption/figure pair under the daily total.
#[component]
fn UsageFigure(label: String, liters: f64) -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme(state.view.read().theme());

    rsx! {
        div {
            div { style: "font-size: 14px; color: {palette.muted_text};", "{label}" }
            div { style: "font-weight: 600;", "{liters}L" }
        }
    }
}
