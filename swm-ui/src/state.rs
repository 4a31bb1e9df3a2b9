//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and mutate the view only through the named
//! transitions here, which also hand the resulting notice to the toast bridge.

use dioxus::prelude::*;
use swm_data::fixtures::{DashboardData, DataSource};
use swm_view::config::DashboardConfig;
use swm_view::state::{Notice, Tab, ViewState};

use crate::js_bridge;

/// Shared state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session, theme, viewport and tab
    pub view: Signal<ViewState>,
    /// Loaded datasets (None until loaded, or if loading failed)
    pub data: Signal<Option<DashboardData>>,
    /// Error message if the data could not be loaded
    pub error_msg: Signal<Option<String>>,
    pub config: Signal<DashboardConfig>,
}

impl AppState {
    /// Create a new AppState, logged out, seeded from `config`.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            view: Signal::new(ViewState::new(&config)),
            data: Signal::new(None),
            error_msg: Signal::new(None),
            config: Signal::new(config),
        }
    }

    pub fn login(&mut self) {
        let notice = self.view.write().login();
        self.notify(&notice);
    }

    pub fn logout(&mut self) {
        let notice = self.view.write().logout();
        self.notify(&notice);
    }

    pub fn toggle_theme(&mut self) {
        let notice = self.view.write().toggle_theme();
        self.notify(&notice);
    }

    pub fn toggle_viewport(&mut self) {
        let notice = self.view.write().toggle_viewport();
        self.notify(&notice);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.view.write().select_tab(tab);
    }

    /// Load the datasets from `source`. A failure is reported on screen and
    /// as an error notice; the dashboard chrome stays usable.
    pub fn load_data(&mut self, source: &impl DataSource) {
        match source.load() {
            Ok(data) => {
                self.data.set(Some(data));
                self.error_msg.set(None);
            }
            Err(e) => {
                log::error!("Failed to load dashboard data: {:#}", e);
                self.error_msg
                    .set(Some(format!("Failed to load dashboard data: {:#}", e)));
                self.notify(&Notice::error("Failed to load dashboard data"));
            }
        }
    }

    /// Show `notice` as a toast.
    pub fn notify(&self, notice: &Notice) {
        let duration = self.config.peek().notice_duration_ms;
        js_bridge::show_toast(&notice.message, notice.kind, duration);
    }
}
