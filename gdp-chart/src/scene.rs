//! Declarative description of a rendered chart.
//!
//! All coordinates inside the plot (bars, axes, label) are relative to the
//! plot area's top-left corner; [`PlotArea`] places that corner on the canvas.

use serde::Serialize;

/// D3's default tick line length.
pub const TICK_SIZE: f64 = 6.0;
/// D3's default gap between a tick line and its label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar, with the metadata an external harness inspects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// Date as "YYYY-MM-DD".
    pub date: String,
    pub value: f64,
}

impl Bar {
    /// The value as it appears in attributes and the tooltip.
    ///
    /// Shortest round-trip decimal, same as JavaScript's `Number#toString`
    /// for GDP-sized values. Outside `1e-6..1e21` JavaScript would switch to
    /// exponent notation; this stays in plain decimal.
    pub fn value_label(&self) -> String {
        self.value.to_string()
    }

    pub fn tooltip_text(&self) -> String {
        format!("Date: {}, GDP: {}", self.date, self.value_label())
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    /// Offset along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    /// DOM id of the axis group (`x-axis` / `y-axis`).
    pub id: String,
    pub orient: AxisOrient,
    /// Translation of the axis group inside the plot area.
    pub offset: (f64, f64),
    /// Pixel extent covered by the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

impl Axis {
    /// SVG path for the domain line, including the outer ticks.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        match self.orient {
            AxisOrient::Bottom => format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
            AxisOrient::Left => format!("M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}"),
        }
    }

    /// Translation of one tick group along the axis.
    pub fn tick_transform(&self, tick: &AxisTick) -> String {
        match self.orient {
            AxisOrient::Bottom => format!("translate({},0)", tick.position),
            AxisOrient::Left => format!("translate(0,{})", tick.position),
        }
    }

    /// End point of a tick line, relative to its tick group.
    pub fn tick_line_end(&self) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (0.0, TICK_SIZE),
            AxisOrient::Left => (-TICK_SIZE, 0.0),
        }
    }

    /// Label anchor point and `text-anchor`, relative to its tick group.
    pub fn tick_label_anchor(&self) -> (f64, f64, &'static str) {
        let offset = TICK_SIZE + TICK_PADDING;
        match self.orient {
            AxisOrient::Bottom => (0.0, offset, "middle"),
            AxisOrient::Left => (-offset, 0.0, "end"),
        }
    }

    /// Baseline shift of tick labels (`dy`).
    pub fn tick_label_dy(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "0.71em",
            AxisOrient::Left => "0.32em",
        }
    }
}

/// A text label, optionally rotated about the plot origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

impl Label {
    pub fn transform(&self) -> String {
        format!("rotate({})", self.rotate)
    }
}

/// Everything one render pass draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<Bar>,
    pub label: Label,
}

impl Scene {
    /// True when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn plot_transform(&self) -> String {
        format!("translate({},{})", self.plot.x, self.plot.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(value: f64) -> Bar {
        Bar {
            index: 2,
            x: 950.0,
            y: 0.0,
            width: 316.0,
            height: 470.0,
            fill: "#3559E0".to_string(),
            date: "1947-07-01".to_string(),
            value,
        }
    }

    #[test]
    fn test_tooltip_text() {
        assert_eq!(bar(250.1).tooltip_text(), "Date: 1947-07-01, GDP: 250.1");
    }

    #[test]
    fn test_whole_values_have_no_fraction() {
        assert_eq!(bar(243.0).value_label(), "243");
    }

    #[test]
    fn test_domain_paths() {
        let bottom = Axis {
            id: "x-axis".to_string(),
            orient: AxisOrient::Bottom,
            offset: (0.0, 470.0),
            range: (0.0, 950.0),
            ticks: Vec::new(),
        };
        assert_eq!(bottom.domain_path(), "M0,6V0H950V6");

        let left = Axis {
            orient: AxisOrient::Left,
            range: (470.0, 0.0),
            ..bottom
        };
        assert_eq!(left.domain_path(), "M-6,470H0V0H-6");
    }
}
