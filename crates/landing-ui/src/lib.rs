//! Landing site page behavior (WASM)
//!
//! Smooth anchor scrolling, copy-to-clipboard, the live player count,
//! navbar shadow, card reveal, and active nav tracking. All decisions come
//! from `landing_types`; this crate only talks to the DOM.

pub mod active_nav;
pub mod api;
pub mod clipboard;
pub mod controller;
pub mod dom;
pub mod effects;
pub mod error;
pub mod globals;
pub mod player_count;
pub mod smooth_scroll;

pub use controller::PageController;
pub use error::UiError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("landing page behavior loaded");

    let document = dom::document()?;
    dom::on_dom_ready(&document, || {
        if let Err(e) = PageController::boot() {
            tracing::error!("page controller failed to start: {}", e);
        }
    })?;
    Ok(())
}
