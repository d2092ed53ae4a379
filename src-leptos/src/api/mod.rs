//! HTTP API bindings for Leptos
//!
//! Type-safe wrappers for calling the listing REST API through the browser's
//! `fetch`.

mod listings;

pub use listings::{get_listings, BrowserListingSource};

use estate_types::FeedError;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

const API_BASE: &str = "/api";

/// Make a GET request to the API
pub async fn api_get<R: DeserializeOwned>(endpoint: &str) -> Result<R, FeedError> {
    let url = format!("{}{}", API_BASE, endpoint);

    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| FeedError::network(format!("Failed to create request: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| FeedError::network("No window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FeedError::network(format!("Fetch failed: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FeedError::network("Response is not a Response"))?;

    if !resp.ok() {
        return Err(FeedError::Http { status: resp.status() });
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| FeedError::decode(format!("JSON parse failed: {:?}", e)))?,
    )
    .await
    .map_err(|e| FeedError::decode(format!("JSON future failed: {:?}", e)))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| FeedError::decode(format!("Deserialize failed: {}", e)))
}
