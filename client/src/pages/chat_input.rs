//! Text and voice submission flows for the chat page.
//!
//! ARCHITECTURE
//! ============
//! Each flow interleaves `ChatSession` transitions with the async work
//! between them: the backend round trip, the microphone prompt, the
//! recorder's final flush. Flows are generic over `ChatBackend`,
//! `Microphone`/`Capture` and `SessionCell`, so the page wires in the browser
//! implementations while tests drive them with in-memory fakes.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged to the console here and rendered by the session; no
//! flow retries.

#[cfg(test)]
#[path = "chat_input_test.rs"]
mod chat_input_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use crate::error::ChatError;
use crate::net::api::ChatBackend;
use crate::state::session::{ChatSession, InputPath};
use crate::util::recorder::{Capture, Microphone};

/// Mutable access to the session, however it is held.
pub trait SessionCell {
    /// Run `f` against the session. `None` if the session is gone.
    fn with_session<U>(&self, f: impl FnOnce(&mut ChatSession) -> U) -> Option<U>;
}

impl SessionCell for RwSignal<ChatSession> {
    fn with_session<U>(&self, f: impl FnOnce(&mut ChatSession) -> U) -> Option<U> {
        self.try_update(f)
    }
}

impl SessionCell for RefCell<ChatSession> {
    fn with_session<U>(&self, f: impl FnOnce(&mut ChatSession) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }
}

fn log_failure(path: InputPath, err: &ChatError) {
    leptos::logging::error!("{path:?} submission failed: {err}");
}

/// Submit typed text. Blank input is dropped without a request.
///
/// Returns `true` when a history came back and was reconciled.
pub async fn submit_text<S, B>(session: &S, backend: &B, raw: &str) -> bool
where
    S: SessionCell,
    B: ChatBackend,
{
    let Some(text) = session.with_session(|s| s.begin_text_submit(raw)).flatten() else {
        return false;
    };
    let result = backend.ask(&text).await;
    if let Err(err) = &result {
        log_failure(InputPath::Text, err);
    }
    session
        .with_session(|s| s.finish_request(InputPath::Text, result))
        .unwrap_or(false)
}

/// Idle → Recording. Returns the running capture, or `None` when a capture
/// is already starting/running or the microphone was refused.
pub async fn start_recording<S, M>(session: &S, microphone: &M) -> Option<M::Capture>
where
    S: SessionCell,
    M: Microphone,
{
    if !session.with_session(ChatSession::begin_microphone_request).unwrap_or(false) {
        return None;
    }
    match microphone.open().await {
        Ok(capture) => {
            session.with_session(ChatSession::recording_started);
            Some(capture)
        }
        Err(err) => {
            if err.is_permission() {
                leptos::logging::warn!("microphone refused: {err}");
            } else {
                leptos::logging::error!("microphone start failed: {err}");
            }
            session.with_session(ChatSession::recording_failed);
            None
        }
    }
}

/// Recording → Idle: stop the capture and release the device right away.
pub fn halt_recording<S, C>(session: &S, capture: &mut C)
where
    S: SessionCell,
    C: Capture,
{
    capture.halt();
    session.with_session(ChatSession::recording_stopped);
}

/// Assemble a halted capture and upload it to the voice endpoint.
///
/// Returns `true` when a history came back and was reconciled.
pub async fn upload_recording<S, B, C>(session: &S, backend: &B, capture: C) -> bool
where
    S: SessionCell,
    B: ChatBackend,
    C: Capture<Payload = B::Audio>,
{
    let result = match capture.finish().await {
        Ok(audio) => {
            session.with_session(ChatSession::begin_voice_upload);
            backend.send_voice(audio).await
        }
        Err(err) => Err(err),
    };
    if let Err(err) = &result {
        log_failure(InputPath::Voice, err);
    }
    session
        .with_session(|s| s.finish_request(InputPath::Voice, result))
        .unwrap_or(false)
}
