//! Dashboard card with a titled header.

use crate::state::AppState;
use dioxus::prelude::*;
use swm_view::style::Palette;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    pub title: String,
    /// Glyph shown at the right of the header
    #[props(default)]
    pub icon: String,
    #[props(default = "#3B82F6".to_string())]
    pub icon_color: String,
    /// Span every column of the grid
    #[props(default = false)]
    pub wide: bool,
    pub children: Element,
}

/// A themed card. Reads the active theme from AppState.
#[component]
pub fn Card(props: CardProps) -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme(state.view.read().theme());
    let span = if props.wide { "grid-column: 1 / -1;" } else { "" };

    rsx! {
        div {
            style: "{span} background: {palette.card_background}; padding: 24px; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                h3 {
                    style: "margin: 0; font-size: 18px; font-weight: 500;",
                    "{props.title}"
                }
                if !props.icon.is_empty() {
                    span {
                        style: "font-size: 22px; color: {props.icon_color};",
                        "{props.icon}"
                    }
                }
            }
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatRowProps {
    pub label: String,
    pub value: String,
}

/// Muted label on the left, bold value on the right.
#[component]
pub fn StatRow(props: StatRowProps) -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme(state.view.read().theme());

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center;",
            span { style: "color: {palette.muted_text};", "{props.label}" }
            span { style: "font-weight: 600;", "{props.value}" }
        }
    }
}
