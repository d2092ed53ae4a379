//! Best Lend - Leptos Frontend
//!
//! Client-side rendered listings site. All listing data comes from the
//! backend REST API under `/api`.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use async_trait as _;
use estate_types as _;
use leptos_meta as _;
use leptos_router as _;
use serde as _;
use serde_wasm_bindgen as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use estate_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Best Lend (Leptos) starting...");

    mount_to_body(App);
}
