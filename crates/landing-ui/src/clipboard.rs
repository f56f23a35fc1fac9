//! Copy to clipboard with textarea fallback and button feedback

use gloo_timers::callback::Timeout;
use landing_types::{
    first_method, global_config, next_step, settle, CopyFeedback, CopyMethod, CopyStep,
    SiteError,
};
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlDocument, HtmlElement, HtmlTextAreaElement};

use crate::dom;
use crate::error::{UiError, UiResult};

/// Copy `text`, then show feedback on `button` or, if every path fails,
/// alert with the text so it can be copied by hand. Never fails.
pub fn copy_to_clipboard(text: &str, button: Option<HtmlElement>) {
    let first = first_method(has_async_clipboard());
    apply(CopyStep::Try(first), text, button.as_ref());
}

fn apply(step: CopyStep, text: &str, button: Option<&HtmlElement>) {
    let config = &global_config().copy_feedback;

    if let CopyStep::Try(CopyMethod::AsyncClipboard) = step {
        let text = text.to_string();
        let button = button.cloned();
        spawn_local(async move {
            let copied = match write_async(&text).await {
                Ok(()) => true,
                Err(e) => {
                    error!("Failed to copy text: {}", e);
                    false
                }
            };
            apply(
                next_step(CopyMethod::AsyncClipboard, copied, &text, config),
                &text,
                button.as_ref(),
            );
        });
        return;
    }

    // Only the selection fallback is left; it runs synchronously so the copy
    // stays inside the click's activation.
    match settle(step, text, config, |method| attempt_sync(method, text)) {
        CopyStep::ShowFeedback => show_copy_feedback(button),
        CopyStep::ManualPrompt(message) => {
            if let Ok(window) = dom::window() {
                window.alert_with_message(&message).ok();
            }
        }
        CopyStep::Try(_) => {}
    }
}

fn attempt_sync(method: CopyMethod, text: &str) -> bool {
    let result = match method {
        CopyMethod::SelectionFallback => copy_with_selection(text),
        CopyMethod::AsyncClipboard => Err(UiError::Js("async clipboard needs a future".into())),
    };
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to copy text: {}", e);
            false
        }
    }
}

fn has_async_clipboard() -> bool {
    let Ok(window) = dom::window() else {
        return false;
    };
    js_sys::Reflect::get(&window.navigator(), &"clipboard".into())
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

async fn write_async(text: &str) -> UiResult<()> {
    let clipboard = dom::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// Off-screen textarea + `execCommand("copy")`. Only a thrown error counts
/// as failure; the textarea is removed either way.
fn copy_with_selection(text: &str) -> UiResult<()> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".into()))?;
    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")?
        .dyn_into()
        .map_err(|_| UiError::Js("textarea is not an HTMLTextAreaElement".into()))?;

    textarea.set_value(text);
    textarea.style().set_property("position", "fixed")?;
    textarea.style().set_property("left", "-999999px")?;
    body.append_child(&textarea)?;
    textarea.focus().ok();
    textarea.select();

    let result = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| UiError::Js("document is not an HTMLDocument".into()))
        .and_then(|html| html.exec_command("copy").map_err(UiError::from));

    textarea.remove();
    result.map(|_| ())
}

/// Swap the button label for the feedback label, then restore it after the
/// configured delay. Overlapping calls each schedule their own restore.
pub fn show_copy_feedback(button: Option<&HtmlElement>) {
    let Some(button) = button else {
        return;
    };
    let config = &global_config().copy_feedback;

    let feedback = CopyFeedback::begin(button.text_content().unwrap_or_default());
    let (label, background) = feedback.active(config);
    button.set_text_content(Some(label));
    button.style().set_property("background", background).ok();

    let button = button.clone();
    Timeout::new(config.duration_ms, move || {
        button.set_text_content(Some(feedback.restore_label()));
        button.style().set_property("background", "").ok();
    })
    .forget();
}
