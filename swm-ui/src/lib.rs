//! Shared Dioxus components, app state and D3.js bridge for the Smart Water
//! Monitor dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart and toast functions via `js_sys::eval()`
//! - `state`: `AppState`, the view-state machine and data behind Dioxus Signals
//! - `components`: Reusable RSX components (cards, chart containers, indicators)

pub mod components;
pub mod js_bridge;
pub mod state;
