//! HTTP submissions to the conversation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): only the reply parser is compiled; submissions are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies become
//! `ChatError`s. A JSON body that simply lacks `history` is not an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{HistoryReply, Message};
use crate::error::ChatError;

/// Form field carrying typed text on the text endpoint.
pub const TEXT_FIELD: &str = "text";
/// Multipart field carrying the recording on the voice endpoint.
pub const AUDIO_FIELD: &str = "audio";
pub const AUDIO_FILENAME: &str = "recording.wav";
pub const AUDIO_MIME: &str = "audio/wav";

/// Outcome of one submission: the fetched history, if the reply carried one.
pub type HistoryResult = Result<Option<Vec<Message>>, ChatError>;

/// The two remote operations the widget depends on.
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    /// Encoded recording accepted by `send_voice`.
    type Audio;

    /// `POST` form-encoded `text` to the text endpoint.
    async fn ask(&self, text: &str) -> HistoryResult;

    /// `POST` multipart `audio` to the voice endpoint.
    async fn send_voice(&self, audio: Self::Audio) -> HistoryResult;
}

/// Decode a reply body into its optional history.
///
/// # Errors
///
/// Returns `ChatError::Decode` when the body is not JSON or `history` is not
/// a list of messages.
pub fn parse_history_body(body: &str) -> HistoryResult {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    if !value.is_object() {
        return Ok(None);
    }
    let reply: HistoryReply = serde_json::from_value(value).map_err(|e| ChatError::Decode(e.to_string()))?;
    Ok(reply.history)
}

/// Backend reached over HTTP at the configured endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    endpoints: crate::config::Endpoints,
}

impl HttpBackend {
    #[must_use]
    pub fn new(endpoints: crate::config::Endpoints) -> Self {
        Self { endpoints }
    }
}

#[cfg(feature = "hydrate")]
impl ChatBackend for HttpBackend {
    type Audio = web_sys::Blob;

    async fn ask(&self, text: &str) -> HistoryResult {
        let params = web_sys::UrlSearchParams::new().map_err(|e| ChatError::Transport(crate::error::js_detail(&e)))?;
        params.append(TEXT_FIELD, text);
        let request = gloo_net::http::Request::post(&self.endpoints.text_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(params)
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        submit(request).await
    }

    async fn send_voice(&self, audio: web_sys::Blob) -> HistoryResult {
        let form = web_sys::FormData::new().map_err(|e| ChatError::Transport(crate::error::js_detail(&e)))?;
        form.append_with_blob_and_filename(AUDIO_FIELD, &audio, AUDIO_FILENAME)
            .map_err(|e| ChatError::Transport(crate::error::js_detail(&e)))?;
        let request = gloo_net::http::Request::post(&self.endpoints.voice_url)
            .body(form)
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        submit(request).await
    }
}

#[cfg(feature = "hydrate")]
async fn submit(request: gloo_net::http::Request) -> HistoryResult {
    let resp = request
        .send()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ChatError::Status(resp.status()));
    }
    let body = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
    parse_history_body(&body)
}
