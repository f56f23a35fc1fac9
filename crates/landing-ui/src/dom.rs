//! Thin helpers over `web-sys` lookups
//!
//! Lookups that can legitimately find nothing return `Option`; only a
//! missing window/document or a thrown JS error is an `Err`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{UiError, UiResult};

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> UiResult<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First match, or `None` when nothing matches or the selector is rejected.
pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn set_style(element: &Element, property: &str, value: &str) -> UiResult<()> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn set_styles<'a, 'b, I>(element: &Element, declarations: I) -> UiResult<()>
where
    I: IntoIterator<Item = (&'a str, &'b str)>,
{
    for (property, value) in declarations {
        set_style(element, property, value)?;
    }
    Ok(())
}

/// Run `f` once the DOM is parsed. If parsing already finished (module
/// loaded late), `f` runs immediately.
pub fn on_dom_ready(document: &Document, f: impl FnOnce() + 'static) -> UiResult<()> {
    use wasm_bindgen::closure::Closure;

    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once(f);
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        callback.as_ref().unchecked_ref(),
    )?;
    callback.forget();
    Ok(())
}
