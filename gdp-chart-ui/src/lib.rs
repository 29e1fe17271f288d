//! Dioxus presentation layer for the GDP chart app.
//!
//! This crate provides:
//! - `fetch`: the one browser GET for the GDP document via `web-sys`
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components that materialize a `gdp_chart::Scene`

pub mod components;
pub mod fetch;
pub mod state;
