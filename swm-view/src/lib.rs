//! View layer for the Smart Water Monitor dashboard, free of any UI toolkit.
//!
//! - `state`: the session/theme/viewport/tab state machine and its notices
//! - `config`: startup defaults for the state machine and formatting
//! - `chart`: chart specifications handed to the D3 charting bridge
//! - `style`: theme palettes and status/trend color mapping

pub mod chart;
pub mod config;
pub mod state;
pub mod style;
