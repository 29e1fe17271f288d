//! Materializes a `gdp_chart::Scene` as SVG.

use super::{AxisGroup, BarRect};
use dioxus::prelude::*;
use gdp_chart::Scene;

#[derive(Props, Clone, PartialEq)]
pub struct ChartSvgProps {
    pub scene: Scene,
}

/// The interactive chart: axes, bars and the rotated value label.
///
/// Every render draws the whole scene afresh, so a new scene replaces the
/// previous drawing rather than adding to it.
#[component]
pub fn ChartSvg(props: ChartSvgProps) -> Element {
    let scene = &props.scene;
    let plot_transform = scene.plot_transform();
    let label = scene.label.clone();
    let label_transform = label.transform();

    rsx! {
        svg {
            width: "{scene.width}",
            height: "{scene.height}",
            g {
                transform: "{plot_transform}",
                AxisGroup { axis: scene.x_axis.clone() }
                AxisGroup { axis: scene.y_axis.clone() }
                for bar in scene.bars.iter() {
                    BarRect {
                        key: "{bar.index}",
                        bar: bar.clone(),
                    }
                }
                text {
                    x: "{label.x}",
                    y: "{label.y}",
                    transform: "{label_transform}",
                    text_anchor: "middle",
                    style: "font-size: 0.75em",
                    "{label.text}"
                }
            }
        }
    }
}
