//! A single hoverable bar.

use crate::state::AppState;
use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use gdp_chart::{Bar, Pointer};

#[derive(Props, Clone, PartialEq)]
pub struct BarRectProps {
    pub bar: Bar,
}

/// One `rect.bar` carrying `data-date` / `data-gdp`.
///
/// Pointer enter shows the shared tooltip for this bar; pointer leave hides it.
#[component]
pub fn BarRect(props: BarRectProps) -> Element {
    let mut state = use_context::<AppState>();
    let bar = props.bar.clone();
    let hovered = props.bar.clone();
    let value = bar.value_label();

    let on_enter = move |evt: MouseEvent| {
        let page = evt.page_coordinates();
        let pointer = Pointer {
            x: page.x,
            y: page.y,
        };
        let config = state.config.read();
        state.tooltip.write().show(&hovered, pointer, &config);
    };

    let on_leave = move |_evt: MouseEvent| {
        state.tooltip.write().hide();
    };

    rsx! {
        rect {
            class: "bar",
            x: "{bar.x}",
            y: "{bar.y}",
            width: "{bar.width}",
            height: "{bar.height}",
            fill: "{bar.fill}",
            "data-date": "{bar.date}",
            "data-gdp": "{value}",
            onmouseenter: on_enter,
            onmouseleave: on_leave,
        }
    }
}
