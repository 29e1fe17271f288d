//! Browser fetch of the GDP document.
//!
//! One `window.fetch` GET through `web-sys`, awaited with
//! `wasm-bindgen-futures`. There is no timeout, no retry and no way to abort
//! the request once it has started.

use gdp_data::{Dataset, LoadError};
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Best-effort text for a rejected promise or failed cast.
fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and return the body as text. Non-2xx responses are errors.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Request("no window available".to_string()))?;

    let request: js_sys::Promise = window.fetch_with_str(url);
    let response: Response = JsFuture::from(request)
        .await
        .map_err(|e| LoadError::Request(describe(e)))?
        .dyn_into()
        .map_err(|e| LoadError::Request(describe(e)))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response.text().map_err(|e| LoadError::Body(describe(e)))?;
    JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Body(describe(e)))?
        .as_string()
        .ok_or_else(|| LoadError::Body("response body is not text".to_string()))
}

/// Fetch and parse the GDP document into a [`Dataset`].
pub async fn fetch_dataset(url: &str) -> Result<Dataset, LoadError> {
    info!("Fetching GDP data from {}", url);
    let body = fetch_text(url).await?;
    let dataset = Dataset::from_json(&body)?;
    info!("Loaded {} GDP data points", dataset.len());
    Ok(dataset)
}
