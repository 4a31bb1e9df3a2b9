//! Logged-out screen.

use dioxus::prelude::*;
use swm_ui::state::AppState;
use swm_view::style::{Palette, ACCENT};

/// The only thing reachable while logged out: a single demo login button.
/// No credentials are asked for or checked.
#[component]
pub fn LoginScreen() -> Element {
    let mut state = use_context::<AppState>();
    let palette = Palette::for_theme(state.view.read().theme());

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center;",
            div {
                style: "background: {palette.card_background}; padding: 32px; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); width: 24rem;",
                h2 {
                    style: "font-size: 24px; font-weight: 700; margin: 0 0 24px 0; text-align: center;",
                    "Login to Smart Water Monitor"
                }
                button {
                    style: "width: 100%; background: {ACCENT}; color: #FFFFFF; border: none; padding: 8px 16px; border-radius: 8px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| state.login(),
                    "Login with Demo Account"
                }
            }
        }
    }
}
