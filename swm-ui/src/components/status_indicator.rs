//! Colored dot for a sensor status.

use dioxus::prelude::*;
use swm_data::model::SensorStatus;
use swm_view::style::status_style;

#[derive(Props, Clone, PartialEq)]
pub struct StatusIndicatorProps {
    pub status: SensorStatus,
}

/// Green, yellow or red dot; unrecognized statuses get a neutral gray.
#[component]
pub fn StatusIndicator(props: StatusIndicatorProps) -> Element {
    let style = status_style(&props.status);

    rsx! {
        div {
            class: "{style.class}",
            title: "{props.status}",
            style: "height: 12px; width: 12px; border-radius: 9999px; background: {style.color};",
        }
    }
}
