//! Active navigation tracking
//!
//! Runs on load and on every `hashchange`. Static pages and the index get
//! their link directly; sectioned pages get a lazily created section
//! watcher that follows whichever section is most visible.

use landing_types::config::SectionWatchConfig;
use landing_types::{
    active_links, global_config, most_visible, resolve_route, NavRoute, SectionSample,
};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::controller::PageController;
use crate::dom;
use crate::error::UiResult;

type SectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Section observer, created at most once per page load.
pub struct SectionWatcher {
    _observer: IntersectionObserver,
    _callback: SectionCallback,
}

impl SectionWatcher {
    fn new(
        config: &'static SectionWatchConfig,
        document: &Document,
        sections: &[Element],
    ) -> UiResult<Self> {
        let document = document.clone();

        let callback: SectionCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let samples: Vec<SectionSample> = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|e| {
                        let ratio = e.intersection_ratio();
                        SectionSample::new(e.target().id(), e.is_intersecting(), ratio)
                    })
                    .collect();

                if let Some(id) = most_visible(&samples, config.min_ratio) {
                    set_active_nav_link(&document, id).ok();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let thresholds: js_sys::Array = config
            .thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect();

        let init = IntersectionObserverInit::new();
        init.set_threshold(&thresholds);
        init.set_root_margin(&config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for section in sections {
            observer.observe(section);
        }

        debug!(count = sections.len(), "section watcher created");
        Ok(Self {
            _observer: observer,
            _callback: callback,
        })
    }
}

/// Initial update plus the `hashchange` listener.
pub fn install(page: &PageController) -> UiResult<()> {
    update_active_nav(page)?;

    let listener_page = page.clone();
    let handler = Closure::wrap(Box::new(move |_event: Event| {
        update_active_nav(&listener_page).ok();
    }) as Box<dyn FnMut(Event)>);

    dom::window()?
        .add_event_listener_with_callback("hashchange", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

pub fn update_active_nav(page: &PageController) -> UiResult<()> {
    let nav = &page.config().navigation;
    let location = dom::window()?.location();
    let pathname = location.pathname()?;
    let hash = location.hash()?;
    let sections = dom::query_all(page.document(), &nav.sections.selector)?;

    match resolve_route(nav, &pathname, &hash, !sections.is_empty()) {
        NavRoute::StaticPage(name) => set_active_nav_link(page.document(), &name),
        NavRoute::Index => set_active_nav_link(page.document(), &nav.index_page),
        NavRoute::Sections { hash } => {
            if !sections.is_empty() && page.state().section_watcher.is_none() {
                let watcher = SectionWatcher::new(&nav.sections, page.document(), &sections)?;
                page.state_mut().section_watcher = Some(watcher);
            }

            match hash {
                Some(id) if page.document().get_element_by_id(&id).is_some() => {
                    set_active_nav_link(page.document(), &id)
                }
                _ => Ok(()),
            }
        }
        NavRoute::Unrouted => Ok(()),
    }
}

/// Clear the active class from every nav link, then set it on each link
/// that matches `key`.
pub fn set_active_nav_link(document: &Document, key: &str) -> UiResult<()> {
    let nav = &global_config().navigation;
    let links = dom::query_all(document, &nav.link_selector)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();

    for link in &links {
        link.class_list().remove_1(&nav.active_class)?;
    }
    for i in active_links(hrefs.iter().map(|h| h.as_deref()), key) {
        links[i].class_list().add_1(&nav.active_class)?;
    }
    Ok(())
}
