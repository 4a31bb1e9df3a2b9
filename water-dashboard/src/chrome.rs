//! Navigation bar and tab bar shown while logged in.

use dioxus::prelude::*;
use swm_data::model::Identity;
use swm_ui::state::AppState;
use swm_view::state::{Tab, Theme, Viewport};
use swm_view::style::{Palette, ACCENT};

const NAV_BUTTON_STYLE: &str = "padding: 8px; border: none; border-radius: 9999px; background: transparent; color: inherit; font-size: 20px; line-height: 1; cursor: pointer;";

/// Brand, theme/viewport toggles, static notification and settings
/// buttons, and logout.
#[component]
pub fn NavBar(identity: Identity) -> Element {
    let mut state = use_context::<AppState>();
    let view = state.view.read().clone();
    let palette = Palette::for_theme(view.theme());

    let (theme_icon, theme_title) = match view.theme() {
        Theme::Dark => ("☀", "Switch to Light Mode"),
        Theme::Light => ("☾", "Switch to Dark Mode"),
    };
    let (viewport_icon, viewport_title) = match view.viewport() {
        Viewport::Mobile => ("🖥", "Switch to Desktop View"),
        Viewport::Desktop => ("📱", "Switch to Mobile View"),
    };

    rsx! {
        nav {
            style: "background: {palette.card_background}; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; height: 64px; padding: 0 16px;",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "font-size: 28px; color: {ACCENT};", "💧" }
                    span { style: "font-size: 20px; font-weight: 600;", "Smart Water Monitor" }
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span {
                        style: "font-size: 14px; color: {palette.muted_text}; margin-right: 8px;",
                        title: "{identity.email}",
                        "{identity.name}"
                    }
                    button {
                        style: NAV_BUTTON_STYLE,
                        title: theme_title,
                        onclick: move |_| state.toggle_theme(),
                        "{theme_icon}"
                    }
                    button {
                        style: NAV_BUTTON_STYLE,
                        title: viewport_title,
                        onclick: move |_| state.toggle_viewport(),
                        "{viewport_icon}"
                    }
                    button { style: NAV_BUTTON_STYLE, title: "Notifications", "🔔" }
                    button { style: NAV_BUTTON_STYLE, title: "Settings", "⚙" }
                    button {
                        style: NAV_BUTTON_STYLE,
                        title: "Logout",
                        onclick: move |_| state.logout(),
                        "⎋"
                    }
                }
            }
        }
    }
}

/// One button per tab; the active one is highlighted.
#[component]
pub fn TabBar(active: Tab) -> Element {
    let mut state = use_context::<AppState>();
    let palette = Palette::for_theme(state.view.read().theme());

    let buttons: Vec<(Tab, &'static str, String)> = Tab::ALL
        .into_iter()
        .map(|tab| {
            let (background, color) = if tab == active {
                (ACCENT, "#FFFFFF")
            } else {
                (palette.card_background, palette.muted_text)
            };
            let style = format!(
                "padding: 8px 16px; border: none; border-radius: 8px; cursor: pointer; background: {}; color: {};",
                background, color
            );
            (tab, tab.title(), style)
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 16px; margin-bottom: 32px;",
            for (tab, title, style) in buttons {
                button {
                    key: "{title}",
                    style: "{style}",
                    onclick: move |_| state.select_tab(tab),
                    "{title}"
                }
            }
        }
    }
}
