//! Bar chart model for the GDP series.
//!
//! Rendering is split in two: [`render`] is a pure function from a
//! [`Dataset`](gdp_data::Dataset) and a [`ChartConfig`] to a declarative
//! [`Scene`], and a presentation layer materializes that scene. This crate
//! ships one presentation layer ([`svg::to_svg`], a static SVG document);
//! the Dioxus components in `gdp-chart-ui` are the interactive one.
//!
//! - `config`: fixed layout and visual constants
//! - `scale`: time and linear scales, D3-compatible tick generation
//! - `scene`: the shapes a render produces
//! - `tooltip`: the single hover overlay and its idle/hover transitions

pub mod config;
pub mod date_range;
pub mod render;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod tooltip;

pub use config::{ChartConfig, Margin};
pub use render::render;
pub use scene::{Axis, AxisOrient, AxisTick, Bar, Label, PlotArea, Scene};
pub use tooltip::{Pointer, Tooltip};
