//! Embedded fixture datasets.
//!
//! The CSVs under `fixtures/` are embedded at compile time with
//! `include_str!` and parsed once at startup. Row order is kept exactly as
//! written; nothing is sorted, deduplicated or recomputed.
//!
//! Panels only ever see a [`DashboardData`], so a live source can replace
//! [`EmbeddedFixtures`] by implementing [`DataSource`].

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;

use crate::model::{
    Alert, DailyUsage, DeviceUsage, QualityReading, Recommendation, SensorReading, UsageForecast,
    UsageSummary,
};

/// Revision of the embedded datasets.
pub const FIXTURE_VERSION: &str = "2024-03-10.1";

const SENSORS_CSV: &str = include_str!("../../fixtures/sensors.csv");
const ALERTS_CSV: &str = include_str!("../../fixtures/alerts.csv");
const RECOMMENDATIONS_CSV: &str = include_str!("../../fixtures/recommendations.csv");
const USAGE_SUMMARY_CSV: &str = include_str!("../../fixtures/usage_summary.csv");
const WATER_QUALITY_CSV: &str = include_str!("../../fixtures/water_quality.csv");
const DEVICE_USAGE_CSV: &str = include_str!("../../fixtures/device_usage.csv");
const WEEKLY_USAGE_CSV: &str = include_str!("../../fixtures/weekly_usage.csv");
const USAGE_FORECAST_CSV: &str = include_str!("../../fixtures/usage_forecast.csv");

/// Every dataset the dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub version: String,
    pub sensors: Vec<SensorReading>,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
    pub usage: UsageSummary,
    pub quality: QualityReading,
    pub devices: Vec<DeviceUsage>,
    pub weekly: Vec<DailyUsage>,
    pub forecast: Vec<UsageForecast>,
}

/// Somewhere the dashboard can get its data from.
pub trait DataSource {
    fn load(&self) -> Result<DashboardData>;
}

/// The datasets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFixtures;

impl DataSource for EmbeddedFixtures {
    fn load(&self) -> Result<DashboardData> {
        let data = DashboardData {
            version: FIXTURE_VERSION.to_string(),
            sensors: parse_rows(SENSORS_CSV).context("sensors.csv")?,
            alerts: parse_rows(ALERTS_CSV).context("alerts.csv")?,
            recommendations: parse_rows(RECOMMENDATIONS_CSV).context("recommendations.csv")?,
            usage: parse_single(USAGE_SUMMARY_CSV).context("usage_summary.csv")?,
            quality: parse_single(WATER_QUALITY_CSV).context("water_quality.csv")?,
            devices: parse_rows(DEVICE_USAGE_CSV).context("device_usage.csv")?,
            weekly: parse_rows(WEEKLY_USAGE_CSV).context("weekly_usage.csv")?,
            forecast: parse_rows(USAGE_FORECAST_CSV).context("usage_forecast.csv")?,
        };
        log::info!(
            "Loaded fixtures {}: {} sensors, {} alerts, {} recommendations, {} devices",
            data.version,
            data.sensors.len(),
            data.alerts.len(),
            data.recommendations.len(),
            data.devices.len()
        );
        Ok(data)
    }
}

/// Parse a CSV with a header row into records, in file order.
///
/// A header-only CSV yields an empty vector.
pub fn parse_rows<T: DeserializeOwned>(csv_data: &str) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Parse a CSV that holds a single record. Extra rows are ignored.
pub fn parse_single<T: DeserializeOwned>(csv_data: &str) -> Result<T> {
    parse_rows(csv_data)?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("expected one record, found none"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SensorKind, SensorStatus, Severity};

    fn load() -> DashboardData {
        EmbeddedFixtures.load().unwrap()
    }

    #[test]
    fn test_embedded_fixtures_load() {
        let data = load();
        assert_eq!(data.version, FIXTURE_VERSION);
        assert_eq!(data.sensors.len(), 3);
        assert_eq!(data.alerts.len(), 2);
        assert_eq!(data.recommendations.len(), 2);
        assert_eq!(data.weekly.len(), 7);
        assert_eq!(data.forecast.len(), 6);
    }

    #[test]
    fn test_device_usage_kept_verbatim() {
        let data = load();
        let devices: Vec<(&str, f64, f64)> = data
            .devices
            .iter()
            .map(|d| (d.device.as_str(), d.usage_liters, d.percentage_of_total))
            .collect();
        assert_eq!(
            devices,
            vec![
                ("Shower", 150.0, 33.33),
                ("Toilet", 100.0, 22.22),
                ("Washing Machine", 90.0, 20.0),
                ("Dishwasher", 60.0, 13.33),
                ("Faucets", 50.0, 11.11),
            ]
        );
    }

    #[test]
    fn test_sensor_rows_in_file_order() {
        let data = load();
        let kinds: Vec<SensorKind> = data.sensors.iter().map(|s| s.kind.clone()).collect();
        assert_eq!(kinds, vec![SensorKind::Flow, SensorKind::Turbidity, SensorKind::Ph]);
        assert_eq!(data.sensors[1].status, SensorStatus::Warning);
        assert_eq!(data.sensors[0].location, "Main Line");
    }

    #[test]
    fn test_single_records() {
        let data = load();
        assert_eq!(data.usage.daily_liters, 450.0);
        assert_eq!(data.usage.yearly_average_liters, 162000.0);
        assert_eq!(data.usage.percent_change, -6.25);
        assert_eq!(data.quality.chlorine_mg_per_l, 0.5);
        assert_eq!(
            data.quality.last_updated.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2024-03-10T10:30:00"
        );
    }

    #[test]
    fn test_alerts_and_recommendations() {
        let data = load();
        assert_eq!(data.alerts[0].severity, Severity::High);
        assert_eq!(data.alerts[0].message, "Potential leak detected in kitchen pipeline");
        assert!(!data.alerts[1].is_read);
        assert_eq!(data.recommendations[0].potential_savings_liters, 15000.0);
        assert_eq!(data.recommendations[1].title, "Fix Dripping Faucets");
    }

    #[test]
    fn test_header_only_csv_is_empty() {
        let rows: Vec<DeviceUsage> =
            parse_rows("device,usage_liters,percentage_of_total\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_single_record_missing() {
        let result: Result<UsageSummary> = parse_single(
            "daily_liters,weekly_liters,monthly_liters,yearly_average_liters,previous_day_liters,percent_change\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_status_survives_parse() {
        let csv_data = "\
id,kind,value,timestamp,location,status
9,pressure,3.4,2024-03-10T10:00:00,Garden,offline
";
        let rows: Vec<SensorReading> = parse_rows(csv_data).unwrap();
        assert_eq!(rows[0].kind, SensorKind::Other("pressure".to_string()));
        assert_eq!(rows[0].status, SensorStatus::Other("offline".to_string()));
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let result: Result<Vec<DailyUsage>> = parse_rows("day,usage_liters\nMon,lots\n");
        assert!(result.is_err());
    }
}
