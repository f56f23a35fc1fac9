//! Navbar shadow on scroll and fade-in reveal of card elements

use landing_types::{reveal_styles, RevealState};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::controller::PageController;
use crate::dom;
use crate::error::UiResult;

pub fn install_navbar_shadow(page: &PageController) -> UiResult<()> {
    let window = dom::window()?;
    let navbar = dom::query_one(page.document(), &page.config().navbar.selector);
    if navbar.is_none() {
        debug!("no navbar; scroll offset still tracked");
    }

    let page = page.clone();
    let scroll_window = window.clone();
    let handler = Closure::wrap(Box::new(move |_event: Event| {
        let offset = scroll_window.page_y_offset().unwrap_or(0.0);
        let shadow = page
            .state_mut()
            .scroll
            .on_scroll(offset, &page.config().navbar);
        if let Some(navbar) = &navbar {
            dom::set_style(navbar, "box-shadow", shadow).ok();
        }
    }) as Box<dyn FnMut(Event)>);

    window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observer over the reveal elements. Kept alive by the page state.
pub struct RevealWatcher {
    _observer: IntersectionObserver,
    _callback: RevealCallback,
}

pub fn install_reveal(page: &PageController) -> UiResult<()> {
    let config = &page.config().reveal;
    let elements = dom::query_all(page.document(), &config.query())?;

    let mut tracked: Vec<(Element, RevealState)> = elements
        .iter()
        .map(|el| (el.clone(), RevealState::Hidden))
        .collect();

    let callback: RevealCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some((element, state)) = tracked.iter_mut().find(|(el, _)| *el == target)
                else {
                    continue;
                };
                if state.observe(entry.is_intersecting()) {
                    dom::set_styles(element, reveal_styles(*state, config)).ok();
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    for element in &elements {
        // Observed even on failure so a partly hidden element still reveals.
        if let Err(e) = dom::set_styles(element, reveal_styles(RevealState::Hidden, config)) {
            warn!("hiding reveal element failed: {}", e);
        }
        observer.observe(element);
    }

    debug!(count = elements.len(), "reveal elements observed");
    page.state_mut().reveal_watcher = Some(RevealWatcher {
        _observer: observer,
        _callback: callback,
    });
    Ok(())
}
