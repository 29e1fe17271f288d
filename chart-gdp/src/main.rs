//! USA GDP bar chart
//!
//! Fetches the quarterly US GDP series and draws it as a bar chart with a
//! hover tooltip per bar.
//!
//! Data flow:
//! 1. On mount: one browser GET for the GDP JSON document.
//! 2. The `data` pairs become a `Dataset`, stored in `AppState`.
//! 3. `gdp_chart::render` turns the dataset into a `Scene` (memoized on the
//!    dataset signal), which `ChartSvg` materializes as SVG.
//! 4. Hovering a bar updates the single shared tooltip.

use dioxus::prelude::*;
use gdp_chart::render;
use gdp_chart_ui::components::{
    ChartContainer, ChartHeader, ChartSvg, ErrorDisplay, LoadingSpinner, TooltipOverlay,
};
use gdp_chart_ui::fetch;
use gdp_chart_ui::state::AppState;
use gdp_data::GDP_DATA_URL;

const TITLE: &str = "USA GDP";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gdp-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: fetch once on mount ───
    use_effect(move || {
        spawn(async move {
            match fetch::fetch_dataset(GDP_DATA_URL).await {
                Ok(dataset) => {
                    if dataset.is_empty() {
                        log::warn!("GDP document contained no data points");
                    }
                    state.dataset.set(dataset);
                }
                Err(e) => {
                    log::error!("Failed to load GDP data: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load GDP data: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // Scales and shapes are rebuilt from scratch whenever the dataset changes.
    let scene = use_memo(move || render(&state.dataset.read(), &state.config.read()));

    let info = state.dataset.read().info().clone();
    let description = info.description.unwrap_or_default();
    let source_name = info.source_name.unwrap_or_default();

    // ─── Render ───
    rsx! {
        div {
            class: "App",
            style: "max-width: 1020px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: TITLE.to_string(),
                description: description,
                source_name: source_name,
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if !scene.read().is_empty() {
                ChartContainer {
                    ChartSvg { scene: scene.read().clone() }
                }
            }

            TooltipOverlay {}
        }
    }
}
