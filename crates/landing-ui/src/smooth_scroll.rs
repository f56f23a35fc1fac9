//! Smooth scrolling for same-page anchors

use landing_types::anchor_target;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::controller::PageController;
use crate::dom;
use crate::error::UiResult;

pub fn install(page: &PageController) -> UiResult<()> {
    let anchors = dom::query_all(page.document(), &page.config().navigation.anchor_selector)?;

    for anchor in &anchors {
        let document = page.document().clone();
        let clicked = anchor.clone();
        let handler = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            scroll_to_target(&document, &clicked);
        }) as Box<dyn FnMut(Event)>);

        anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    debug!(count = anchors.len(), "smooth scroll bound");
    Ok(())
}

/// Scroll the anchor's target to the top of the viewport. Returns false
/// when the href names nothing in the document.
pub fn scroll_to_target(document: &Document, anchor: &Element) -> bool {
    let href = anchor.get_attribute("href");
    let target = anchor_target(href.as_deref()).and_then(|sel| dom::query_one(document, sel));
    let Some(target) = target else {
        return false;
    };

    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}
