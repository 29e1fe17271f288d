//! Reusable Dioxus RSX components for the GDP chart app.

mod axis_group;
mod bar_rect;
mod chart_container;
mod chart_header;
mod chart_svg;
mod error_display;
mod loading_spinner;
mod tooltip_overlay;

pub use axis_group::AxisGroup;
pub use bar_rect::BarRect;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_svg::ChartSvg;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use tooltip_overlay::TooltipOverlay;
