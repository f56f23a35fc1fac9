//! Status endpoint client
//!
//! Uses web-sys fetch. The body is returned raw and decoded by
//! `landing_types`, so every shape/parse rule stays host-testable.

use landing_types::FetchOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::dom;
use crate::error::{UiError, UiResult};

#[derive(Clone)]
pub struct StatusClient {
    url: String,
}

impl StatusClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    /// One GET. Transport errors become `FetchOutcome::Failed`.
    pub async fn fetch(&self) -> FetchOutcome {
        match self.get().await {
            Ok(outcome) => outcome,
            Err(e) => FetchOutcome::Failed(e.into()),
        }
    }

    async fn get(&self) -> UiResult<FetchOutcome> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&self.url, &opts)?;
        request.headers().set("Accept", "application/json")?;

        let window = dom::window()?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| UiError::Js("response is not a Response".into()))?;

        if !resp.ok() {
            return Ok(FetchOutcome::Status(resp.status()));
        }

        let body = JsFuture::from(resp.text()?).await?;
        Ok(FetchOutcome::Body(body.as_string().unwrap_or_default()))
    }
}
