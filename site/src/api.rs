//! HTTP client for the remote content API.
//!
//! One `ApiClient` is created at mount and shared through context. On
//! wasm32 reqwest lowers to the browser fetch API, so every call here is a
//! plain non-blocking request on the UI event loop.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::config::{API_BASE, FORM_RELAY_URL};
use crate::models::MessageDraft;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base(API_BASE)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Single GET, JSON payload decoded verbatim. Decode failures count as
    /// fetch failures; callers degrade to an empty render.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.json::<T>().await?)
    }

    /// First-party message intake.
    pub async fn post_message(&self, draft: &MessageDraft) -> Result<(), ApiError> {
        let url = format!("{}/messages", self.base);
        let response = self.http.post(&url).json(draft).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }

    /// Third-party relay, same body shape, independent of the intake call.
    pub async fn relay_message(&self, draft: &MessageDraft) -> Result<(), ApiError> {
        let response = self.http.post(FORM_RELAY_URL).json(draft).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Console-level error reporting, the only sink a CSR bundle has.
pub(crate) fn log_error(context: &str, err: &dyn std::fmt::Display) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {err}")));
}
