use landing_types::SiteError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("js: {0}")]
    Js(String),

    #[error(transparent)]
    Site(#[from] SiteError),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

impl From<UiError> for SiteError {
    fn from(err: UiError) -> Self {
        match err {
            UiError::Site(inner) => inner,
            other => SiteError::Js(other.to_string()),
        }
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort message from a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

pub type UiResult<T> = Result<T, UiError>;
