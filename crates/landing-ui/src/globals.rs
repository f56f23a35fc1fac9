//! Functions exposed on `window` for inline handlers in the page markup,
//! e.g. `onclick="copyToClipboard('connect play.example', this)"`.

use js_sys::Reflect;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::active_nav;
use crate::clipboard::copy_to_clipboard;
use crate::controller::PageController;
use crate::dom;
use crate::error::UiResult;

pub fn install(page: &PageController) -> UiResult<()> {
    let window = dom::window()?;

    let copy = Closure::wrap(Box::new(|text: JsValue, button: JsValue| {
        let text = text.as_string().unwrap_or_default();
        copy_to_clipboard(&text, button.dyn_into::<HtmlElement>().ok());
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    Reflect::set(&window, &"copyToClipboard".into(), copy.as_ref())?;
    copy.forget();

    let update_page = page.clone();
    let update = Closure::wrap(Box::new(move || {
        if let Err(e) = active_nav::update_active_nav(&update_page) {
            warn!("updateActiveNav: {}", e);
        }
    }) as Box<dyn FnMut()>);
    Reflect::set(&window, &"updateActiveNav".into(), update.as_ref())?;
    update.forget();

    let document = page.document().clone();
    let set_link = Closure::wrap(Box::new(move |key: JsValue| {
        let key = key.as_string().unwrap_or_default();
        if let Err(e) = active_nav::set_active_nav_link(&document, &key) {
            warn!("setActiveNavLink: {}", e);
        }
    }) as Box<dyn FnMut(JsValue)>);
    Reflect::set(&window, &"setActiveNavLink".into(), set_link.as_ref())?;
    set_link.forget();

    Ok(())
}
