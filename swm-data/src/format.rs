//! Display formatting for instants and labels.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How time-of-day strings are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockFormat {
    /// `10:30:00 AM`
    #[default]
    TwelveHour,
    /// `10:30:00`
    TwentyFourHour,
}

/// Format an instant as a local time-of-day string.
pub fn clock_time(instant: &NaiveDateTime, format: ClockFormat) -> String {
    match format {
        ClockFormat::TwelveHour => instant.format("%-I:%M:%S %p").to_string(),
        ClockFormat::TwentyFourHour => instant.format("%H:%M:%S").to_string(),
    }
}

/// Upper-case the first character of `word`, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_clock_time_twelve_hour() {
        assert_eq!(clock_time(&at(10, 30), ClockFormat::TwelveHour), "10:30:00 AM");
        assert_eq!(clock_time(&at(9, 45), ClockFormat::TwelveHour), "9:45:00 AM");
        assert_eq!(clock_time(&at(0, 5), ClockFormat::TwelveHour), "12:05:00 AM");
        assert_eq!(clock_time(&at(15, 0), ClockFormat::TwelveHour), "3:00:00 PM");
    }

    #[test]
    fn test_clock_time_twenty_four_hour() {
        assert_eq!(clock_time(&at(9, 45), ClockFormat::TwentyFourHour), "09:45:00");
        assert_eq!(clock_time(&at(15, 0), ClockFormat::TwentyFourHour), "15:00:00");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("turbidity"), "Turbidity");
        assert_eq!(capitalize("ph"), "Ph");
        assert_eq!(capitalize("Flow"), "Flow");
        assert_eq!(capitalize(""), "");
    }
}
