//! Chart specifications for the D3 charting bridge.
//!
//! A `ChartSpec` is everything the JS side needs to draw one chart: the
//! ordered data, the chart kind and the styling hints for the active theme.
//! Data keeps the order of the source records; the builders never sort,
//! aggregate or recompute values.

use serde::Serialize;
use swm_data::model::{DailyUsage, DeviceUsage, UsageForecast};

use crate::state::Theme;
use crate::style::Palette;

/// Categorical colors for proportional charts, cycled by index.
pub const CATEGORY_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

const USAGE_COLOR: &str = "#3B82F6";
const PREDICTED_COLOR: &str = "#10B981";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// One category on the x-axis (or one pie segment) with a value per series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Datum {
    pub category: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub unit: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub series: Vec<Series>,
    /// Per-datum colors for pie charts.
    pub palette: Vec<String>,
    pub grid_color: String,
    pub axis_color: String,
    pub tooltip_background: String,
    pub tooltip_text: String,
    pub legend: bool,
    pub height: u32,
}

impl ChartConfig {
    fn new(kind: ChartKind, theme: Theme, height: u32) -> Self {
        let palette = Palette::for_theme(theme);
        Self {
            kind,
            series: Vec::new(),
            palette: Vec::new(),
            grid_color: palette.chart_grid.to_string(),
            axis_color: palette.chart_axis.to_string(),
            tooltip_background: palette.tooltip_background.to_string(),
            tooltip_text: palette.tooltip_text.to_string(),
            legend: false,
            height,
        }
    }

    fn with_series(mut self, label: &str, unit: &str, color: &str) -> Self {
        self.series.push(Series {
            label: label.to_string(),
            unit: unit.to_string(),
            color: color.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Datum>,
    pub config: ChartConfig,
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        self.config.kind
    }

    /// The `(data_json, config_json)` pair the JS renderers take.
    pub fn to_json(&self) -> serde_json::Result<(String, String)> {
        Ok((
            serde_json::to_string(&self.data)?,
            serde_json::to_string(&self.config)?,
        ))
    }
}

/// Proportional chart of usage per device.
///
/// Segment size is the device's usage; the supplied percentage rides along
/// as the second value and is only used for labels.
pub fn device_usage_chart(devices: &[DeviceUsage], theme: Theme) -> ChartSpec {
    let data: Vec<Datum> = devices
        .iter()
        .map(|d| Datum {
            category: d.device.clone(),
            values: vec![d.usage_liters, d.percentage_of_total],
        })
        .collect();

    let mut config = ChartConfig::new(ChartKind::Pie, theme, 256)
        .with_series("Usage", "L", USAGE_COLOR)
        .with_series("Share", "%", USAGE_COLOR);
    config.palette = (0..data.len())
        .map(|i| CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()].to_string())
        .collect();
    config.legend = true;

    ChartSpec { data, config }
}

/// Bar chart of the seven-day usage trend.
pub fn weekly_trend_chart(days: &[DailyUsage], theme: Theme) -> ChartSpec {
    let data = days
        .iter()
        .map(|d| Datum {
            category: d.day.clone(),
            values: vec![d.usage_liters],
        })
        .collect();

    ChartSpec {
        data,
        config: ChartConfig::new(ChartKind::Bar, theme, 320).with_series("Usage", "L", USAGE_COLOR),
    }
}

/// Two-series line chart of actual against predicted usage.
pub fn forecast_chart(buckets: &[UsageForecast], theme: Theme) -> ChartSpec {
    let data = buckets
        .iter()
        .map(|b| Datum {
            category: b.time.clone(),
            values: vec![b.actual_liters, b.predicted_liters],
        })
        .collect();

    let mut config = ChartConfig::new(ChartKind::Line, theme, 384)
        .with_series("Actual Usage", "L", USAGE_COLOR)
        .with_series("Predicted Usage", "L", PREDICTED_COLOR);
    config.legend = true;

    ChartSpec { data, config }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, usage: f64, share: f64) -> DeviceUsage {
        DeviceUsage {
            device: name.to_string(),
            usage_liters: usage,
            percentage_of_total: share,
        }
    }

    fn household_devices() -> Vec<DeviceUsage> {
        vec![
            device("Shower", 150.0, 33.33),
            device("Toilet", 100.0, 22.22),
            device("Washing Machine", 90.0, 20.0),
            device("Dishwasher", 60.0, 13.33),
            device("Faucets", 50.0, 11.11),
        ]
    }

    #[test]
    fn test_device_chart_has_one_segment_per_device_in_order() {
        let spec = device_usage_chart(&household_devices(), Theme::Light);
        assert_eq!(spec.kind(), ChartKind::Pie);

        let segments: Vec<(&str, f64)> = spec
            .data
            .iter()
            .map(|d| (d.category.as_str(), d.values[0]))
            .collect();
        assert_eq!(
            segments,
            vec![
                ("Shower", 150.0),
                ("Toilet", 100.0),
                ("Washing Machine", 90.0),
                ("Dishwasher", 60.0),
                ("Faucets", 50.0),
            ]
        );
        assert_eq!(spec.config.palette, CATEGORY_PALETTE.map(String::from).to_vec());
        assert!(spec.config.legend);
    }

    #[test]
    fn test_device_chart_keeps_supplied_percentages() {
        // Shares that do not add up must pass through untouched.
        let devices = vec![device("Shower", 150.0, 70.0), device("Toilet", 100.0, 70.0)];
        let spec = device_usage_chart(&devices, Theme::Light);
        assert_eq!(spec.data[0].values, vec![150.0, 70.0]);
        assert_eq!(spec.data[1].values, vec![100.0, 70.0]);
    }

    #[test]
    fn test_palette_cycles_past_five_devices() {
        let devices: Vec<DeviceUsage> = (0..7)
            .map(|i| device(&format!("Device {i}"), 10.0, 1.0))
            .collect();
        let spec = device_usage_chart(&devices, Theme::Light);
        assert_eq!(spec.config.palette[5], "#0088FE");
        assert_eq!(spec.config.palette[6], "#00C49F");
    }

    #[test]
    fn test_empty_inputs_give_empty_charts() {
        let pie = device_usage_chart(&[], Theme::Dark);
        assert!(pie.data.is_empty());
        assert!(pie.config.palette.is_empty());
        assert!(weekly_trend_chart(&[], Theme::Dark).data.is_empty());
        assert!(forecast_chart(&[], Theme::Dark).data.is_empty());
    }

    #[test]
    fn test_weekly_trend_chart() {
        let days = vec![
            DailyUsage {
                day: "Mon".to_string(),
                usage_liters: 450.0,
            },
            DailyUsage {
                day: "Tue".to_string(),
                usage_liters: 480.0,
            },
        ];
        let spec = weekly_trend_chart(&days, Theme::Light);
        assert_eq!(spec.kind(), ChartKind::Bar);
        assert_eq!(spec.data[1].category, "Tue");
        assert_eq!(spec.data[1].values, vec![480.0]);
        assert_eq!(spec.config.series.len(), 1);
    }

    #[test]
    fn test_forecast_chart_series() {
        let buckets = vec![UsageForecast {
            time: "00:00".to_string(),
            actual_liters: 120.0,
            predicted_liters: 115.0,
        }];
        let spec = forecast_chart(&buckets, Theme::Light);
        assert_eq!(spec.kind(), ChartKind::Line);
        let labels: Vec<&str> = spec.config.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Actual Usage", "Predicted Usage"]);
        assert_eq!(spec.config.series[1].color, "#10B981");
        assert_eq!(spec.data[0].values, vec![120.0, 115.0]);
    }

    #[test]
    fn test_theme_hints() {
        let light = weekly_trend_chart(&[], Theme::Light);
        let dark = weekly_trend_chart(&[], Theme::Dark);
        assert_eq!(light.config.axis_color, "#4B5563");
        assert_eq!(dark.config.axis_color, "#9CA3AF");
        assert_eq!(dark.config.tooltip_background, "#1F2937");
    }

    #[test]
    fn test_json_shape() {
        let spec = device_usage_chart(&household_devices()[..1], Theme::Light);
        let (data_json, config_json) = spec.to_json().unwrap();
        assert_eq!(data_json, r#"[{"category":"Shower","values":[150.0,33.33]}]"#);

        let config: serde_json::Value = serde_json::from_str(&config_json).unwrap();
        assert_eq!(config["kind"], "pie");
        assert_eq!(config["gridColor"], "#e5e7eb");
        assert_eq!(config["series"][0]["unit"], "L");
    }
}
