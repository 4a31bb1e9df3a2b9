//! Smart Water Monitor dashboard
//!
//! A single-page household water dashboard: usage, water quality, sensors and
//! a predictive usage chart, all drawn from fixture data embedded in the WASM
//! binary. There is no backend and nothing is persisted.
//!
//! Data flow:
//! 1. `swm-data` embeds the fixture CSVs with `include_str!`.
//! 2. On mount: parse the fixtures into `DashboardData` and install the
//!    toast and D3.js chart scripts.
//! 3. Every click goes through one `AppState` transition, which updates the
//!    view state and shows a toast; Dioxus re-renders from the new state.
//! 4. Panels that own charts re-render them via D3.js whenever the theme or
//!    data changes.
//!
//! The login is a demo bypass: it takes no credentials and always assigns
//! the configured demo identity.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use swm_data::fixtures::EmbeddedFixtures;
use swm_ui::components::ErrorDisplay;
use swm_ui::js_bridge;
use swm_ui::state::AppState;
use swm_view::config::DashboardConfig;
use swm_view::state::Screen;
use swm_view::style::{max_content_width, Palette};

mod chrome;
mod login;
mod panels;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting Smart Water Monitor dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("water-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(DashboardConfig::default()));

    // ─── Effect 1: Load fixtures and install JS helpers once on mount ───
    use_effect(move || {
        js_bridge::init_toasts();
        js_bridge::init_charts();
        state.load_data(&EmbeddedFixtures);
    });

    // ─── Effect 2: Mirror the theme onto the document root ───
    use_effect(move || {
        let theme = state.view.read().theme();
        js_bridge::apply_root_theme(theme);
    });

    // ─── Render ───
    let view = state.view.read().clone();
    let palette = Palette::for_theme(view.theme());
    let error = state.error_msg.read().clone();

    let body = match view.screen() {
        Screen::Login => rsx! {
            login::LoginScreen {}
        },
        Screen::Dashboard { identity, tab } => {
            let width = max_content_width(view.viewport());
            rsx! {
                div {
                    style: "max-width: {width}; margin: 0 auto;",
                    chrome::NavBar { identity: identity.clone() }
                    main {
                        style: "padding: 32px 16px;",
                        chrome::TabBar { active: tab }
                        if let Some(err) = error {
                            ErrorDisplay { message: err }
                        }
                        panels::ActivePanel { tab }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: "min-height: 100vh; background: {palette.page_background}; color: {palette.page_text}; font-family: system-ui, -apple-system, sans-serif;",
            {body}
        }
    }
}
