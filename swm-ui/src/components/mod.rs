//! Reusable Dioxus RSX components for the dashboard.

mod card;
mod chart_container;
mod error_display;
mod status_indicator;

pub use card::{Card, StatRow};
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use status_indicator::StatusIndicator;
