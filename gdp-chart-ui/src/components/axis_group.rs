//! One chart axis: domain line plus labeled ticks.

use dioxus::prelude::*;
use gdp_chart::Axis;

#[derive(Props, Clone, PartialEq)]
pub struct AxisGroupProps {
    pub axis: Axis,
}

/// Draws an axis group the way D3's `axisBottom` / `axisLeft` lay it out.
#[component]
pub fn AxisGroup(props: AxisGroupProps) -> Element {
    let axis = &props.axis;
    let transform = format!("translate({},{})", axis.offset.0, axis.offset.1);
    let domain = axis.domain_path();
    let (x2, y2) = axis.tick_line_end();
    let (label_x, label_y, anchor) = axis.tick_label_anchor();
    let dy = axis.tick_label_dy();
    let ticks: Vec<(String, String)> = axis
        .ticks
        .iter()
        .map(|tick| (axis.tick_transform(tick), tick.label.clone()))
        .collect();

    rsx! {
        g {
            id: "{axis.id}",
            transform: "{transform}",
            fill: "none",
            font_size: "10",
            font_family: "sans-serif",
            text_anchor: "{anchor}",
            path {
                class: "domain",
                stroke: "currentColor",
                d: "{domain}",
            }
            for (tick_transform, label) in ticks.into_iter() {
                g {
                    key: "{tick_transform}",
                    class: "tick",
                    opacity: "1",
                    transform: "{tick_transform}",
                    line {
                        stroke: "currentColor",
                        x2: "{x2}",
                        y2: "{y2}",
                    }
                    text {
                        fill: "currentColor",
                        x: "{label_x}",
                        y: "{label_y}",
                        dy: "{dy}",
                        "{label}"
                    }
                }
            }
        }
    }
}
