//! Failure taxonomy for the input paths.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable. Call sites turn any `ChatError` into one
//! visible error bubble plus an error status and log the detail to the
//! console; nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors surfaced by microphone capture and backend submissions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// Microphone permission was denied or the device could not be opened.
    #[error("microphone unavailable: {0}")]
    Microphone(String),
    /// The recorder failed while stopping or assembling the audio payload.
    #[error("audio capture failed: {0}")]
    Capture(String),
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("backend rejected request: {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ChatError {
    /// True for failures raised before any audio was captured.
    #[must_use]
    pub fn is_permission(&self) -> bool {
        matches!(self, Self::Microphone(_))
    }
}

/// Best-effort readable text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub(crate) fn js_detail(err: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(js_err.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
