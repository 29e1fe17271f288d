//! Static SVG serialization of a [`Scene`].
//!
//! Mirrors the element structure of the interactive chart (same ids, classes
//! and `data-*` attributes) so the same queries work against either output.
//! Each bar carries a `<title>` with its tooltip text in place of the hover
//! overlay.

use std::fmt;

use crate::scene::{Axis, AxisOrient, Scene};

/// Render `scene` as a standalone SVG document.
pub fn to_svg(scene: &Scene) -> String {
    SvgDocument(scene).to_string()
}

/// `Display` adapter writing a scene as SVG markup.
pub struct SvgDocument<'a>(pub &'a Scene);

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scene = self.0;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            scene.width, scene.height
        )?;
        writeln!(f, r#"<g transform="{}">"#, scene.plot_transform())?;
        write_axis(f, &scene.x_axis)?;
        write_axis(f, &scene.y_axis)?;

        for bar in &scene.bars {
            writeln!(
                f,
                r#"<rect class="bar" x="{}" y="{}" width="{}" height="{}" data-date="{}" data-gdp="{}" fill="{}"><title>{}</title></rect>"#,
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                escape(&bar.date),
                bar.value_label(),
                escape(&bar.fill),
                escape(&bar.tooltip_text()),
            )?;
        }

        let label = &scene.label;
        writeln!(
            f,
            r#"<text x="{}" y="{}" transform="{}" text-anchor="middle" style="font-size: 0.75em">{}</text>"#,
            label.x,
            label.y,
            label.transform(),
            escape(&label.text)
        )?;
        writeln!(f, "</g>")?;
        write!(f, "</svg>")
    }
}

fn write_axis(f: &mut fmt::Formatter<'_>, axis: &Axis) -> fmt::Result {
    let anchor = match axis.orient {
        AxisOrient::Bottom => "middle",
        AxisOrient::Left => "end",
    };
    writeln!(
        f,
        r#"<g id="{}" transform="translate({},{})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}">"#,
        axis.id, axis.offset.0, axis.offset.1, anchor
    )?;
    writeln!(
        f,
        r#"<path class="domain" stroke="currentColor" d="{}"/>"#,
        axis.domain_path()
    )?;

    let (x2, y2) = axis.tick_line_end();
    let (tx, ty, _) = axis.tick_label_anchor();
    for tick in &axis.ticks {
        writeln!(
            f,
            r#"<g class="tick" opacity="1" transform="{}"><line stroke="currentColor" x2="{}" y2="{}"/><text fill="currentColor" x="{}" y="{}" dy="{}">{}</text></g>"#,
            axis.tick_transform(tick),
            x2,
            y2,
            tx,
            ty,
            axis.tick_label_dy(),
            escape(&tick.label)
        )?;
    }
    writeln!(f, "</g>")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
