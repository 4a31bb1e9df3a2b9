//! Read-only records displayed by the dashboard.
//!
//! Every record derives `Deserialize` so it can be loaded straight from the
//! fixture CSVs. Enumerated fields are tolerant: a value this build does not
//! know is kept as `Other(raw)` instead of failing the whole load, and the
//! panels give it a neutral treatment.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::capitalize;

/// Declares a string-backed enum that never fails to parse.
macro_rules! tolerant_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
        #[serde(from = "String")]
        pub enum $name {
            $($variant,)+
            /// A value this build does not recognize, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The fixture spelling of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(raw) => raw,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $($text => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tolerant_enum! {
    /// What a sensor measures.
    SensorKind {
        Flow => "flow",
        Turbidity => "turbidity",
        Ph => "ph",
    }
}

tolerant_enum! {
    /// Health of a sensor reading.
    SensorStatus {
        Normal => "normal",
        Warning => "warning",
        Critical => "critical",
    }
}

tolerant_enum! {
    /// Category of an alert.
    AlertKind {
        Leak => "leak",
        Quality => "quality",
        Usage => "usage",
    }
}

tolerant_enum! {
    /// Alert severity.
    Severity {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

tolerant_enum! {
    /// Effort needed to carry out a recommendation.
    Difficulty {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
}

impl SensorKind {
    /// Card heading for a sensor of this kind, e.g. "Turbidity Sensor".
    pub fn label(&self) -> String {
        format!("{} Sensor", capitalize(self.as_str()))
    }
}

/// A single sensor reading shown on the Sensors panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorReading {
    pub id: String,
    pub kind: SensorKind,
    pub value: f64,
    pub timestamp: NaiveDateTime,
    pub location: String,
    pub status: SensorStatus,
}

/// An alert shown on the Overview panel.
///
/// `is_read` is carried through from the data but nothing acts on it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub message: String,
    pub severity: Severity,
    pub timestamp: NaiveDateTime,
    pub is_read: bool,
}

/// A water-saving recommendation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Estimated savings in liters per year.
    pub potential_savings_liters: f64,
    pub difficulty: Difficulty,
    pub implemented: bool,
}

/// The identity assigned by the demo login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl Identity {
    /// The fixed account the demo login assigns.
    pub fn demo() -> Self {
        Self {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            name: "John Doe".to_string(),
        }
    }
}

/// Household consumption totals in liters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsageSummary {
    pub daily_liters: f64,
    pub weekly_liters: f64,
    pub monthly_liters: f64,
    pub yearly_average_liters: f64,
    pub previous_day_liters: f64,
    /// Change of today against yesterday, in percent. Supplied, not derived.
    pub percent_change: f64,
}

/// Latest water quality snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QualityReading {
    pub ph: f64,
    /// Nephelometric Turbidity Units (NTU).
    pub turbidity: f64,
    pub chlorine_mg_per_l: f64,
    pub temperature_c: f64,
    pub last_updated: NaiveDateTime,
}

/// Consumption attributed to one appliance.
///
/// `percentage_of_total` is precomputed upstream and is never checked
/// against `usage_liters`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceUsage {
    pub device: String,
    pub usage_liters: f64,
    pub percentage_of_total: f64,
}

/// One bar of the weekly trend chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyUsage {
    pub day: String,
    pub usage_liters: f64,
}

/// One time-of-day bucket of the predictive analysis chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsageForecast {
    pub time: String,
    pub actual_liters: f64,
    pub predicted_liters: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_parse() {
        assert_eq!(SensorKind::from("flow"), SensorKind::Flow);
        assert_eq!(SensorStatus::from("critical"), SensorStatus::Critical);
        assert_eq!(AlertKind::from("leak"), AlertKind::Leak);
        assert_eq!(Severity::from("medium"), Severity::Medium);
        assert_eq!(Difficulty::from("hard"), Difficulty::Hard);
    }

    #[test]
    fn test_parse_ignores_case_and_padding() {
        assert_eq!(SensorStatus::from(" Warning "), SensorStatus::Warning);
    }

    #[test]
    fn test_unknown_value_is_kept_verbatim() {
        let status = SensorStatus::from("offline");
        assert_eq!(status, SensorStatus::Other("offline".to_string()));
        assert_eq!(status.as_str(), "offline");
        assert_eq!(status.to_string(), "offline");
    }

    #[test]
    fn test_sensor_labels() {
        assert_eq!(SensorKind::Flow.label(), "Flow Sensor");
        assert_eq!(SensorKind::Turbidity.label(), "Turbidity Sensor");
        assert_eq!(SensorKind::Ph.label(), "Ph Sensor");
        assert_eq!(SensorKind::from("pressure").label(), "Pressure Sensor");
    }

    #[test]
    fn test_demo_identity() {
        let identity = Identity::demo();
        assert_eq!(identity.id, "1");
        assert_eq!(identity.email, "user@example.com");
        assert_eq!(identity.name, "John Doe");
    }
}
