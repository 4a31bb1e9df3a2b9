//! Records, embedded fixtures and display formatting for the Smart Water
//! Monitor dashboard.
//!
//! This crate has no UI dependency:
//! - `model`: the read-only records the panels display
//! - `fixtures`: the embedded CSV datasets and the `DataSource` seam
//! - `format`: clock time and label formatting

pub mod fixtures;
pub mod format;
pub mod model;
