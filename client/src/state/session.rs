//! The chat session: every piece of mutable widget state in one value.
//!
//! ARCHITECTURE
//! ============
//! `ChatSession` owns the conversation log, the rendered view, the status
//! line and the recorder phase. It lives in one `RwSignal` provided through
//! context, and each input flow receives it explicitly. All methods are
//! synchronous state transitions; network and microphone work happen in
//! `pages::chat_input` between calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::ChatError;
use crate::net::types::{AI_ROLE, Message, USER_ROLE};
use crate::state::log::ConversationLog;
use crate::state::recorder::RecorderPhase;
use crate::state::status::{self, StatusLine};
use crate::state::view::ChatView;
use crate::util::bubble::{extract_audio_url, local_time_label};

pub const TEXT_FAILED: &str = "Text processing failed.";
pub const VOICE_FAILED: &str = "Voice processing failed.";
pub const MICROPHONE_DENIED: &str = "Microphone access denied.";

/// Glyph prefixed to every error bubble.
pub const ERROR_GLYPH: &str = "❌";

/// Which input produced a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputPath {
    Text,
    Voice,
}

impl InputPath {
    fn success_status(self) -> &'static str {
        match self {
            Self::Text => status::TEXT_REPLY_RECEIVED,
            Self::Voice => status::VOICE_REPLY_RECEIVED,
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Self::Text => TEXT_FAILED,
            Self::Voice => VOICE_FAILED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChatSession {
    pub log: ConversationLog,
    pub view: ChatView,
    pub status: StatusLine,
    pub recorder: RecorderPhase,
    /// Bumped on every successful reply; the confetti layer watches it.
    pub celebrations: u64,
    clock: fn() -> String,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::with_clock(local_time_label)
    }
}

impl ChatSession {
    /// Session whose bubble timestamps come from `clock`.
    #[must_use]
    pub fn with_clock(clock: fn() -> String) -> Self {
        Self {
            log: ConversationLog::default(),
            view: ChatView::default(),
            status: StatusLine::default(),
            recorder: RecorderPhase::default(),
            celebrations: 0,
            clock,
        }
    }

    pub fn update_status(&mut self, text: &str, is_active: bool, is_error: bool) {
        self.status.update(text, is_active, is_error);
    }

    pub fn show_typing_indicator(&mut self) {
        self.view.show_typing_indicator();
    }

    pub fn remove_typing_indicator(&mut self) {
        self.view.remove_typing_indicator();
    }

    /// Render one bubble. Does not touch the log.
    pub fn add_message(&mut self, text: &str, role: &str, audio_url: Option<String>) {
        let stamp = (self.clock)();
        self.view.add_message(text, role, audio_url, stamp);
    }

    /// Render and log every fetched turn not already in the log.
    /// Returns how many bubbles were added.
    pub fn update_messages(&mut self, history: Vec<Message>) -> usize {
        let fresh = self.log.reconcile(history);
        for message in &fresh {
            let audio_url = extract_audio_url(&message.content);
            self.add_message(&message.content, &message.role, audio_url);
        }
        fresh.len()
    }

    /// Start a text submission from the raw field value.
    ///
    /// Returns the trimmed text to send, or `None` when it is blank (in which
    /// case nothing changed). The user's message is echoed and logged before
    /// any request is made.
    pub fn begin_text_submit(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.update_status(status::PROCESSING_TEXT, true, false);
        self.show_typing_indicator();
        self.add_message(text, USER_ROLE, None);
        self.log.append(Message::user(text));
        Some(text.to_owned())
    }

    /// Mark an assembled recording as being uploaded.
    pub fn begin_voice_upload(&mut self) {
        self.update_status(status::PROCESSING_VOICE, true, false);
        self.show_typing_indicator();
    }

    /// Apply the outcome of a backend submission.
    ///
    /// Returns `true` when a history was reconciled, which is also when the
    /// celebration counter moves.
    pub fn finish_request(&mut self, path: InputPath, result: Result<Option<Vec<Message>>, ChatError>) -> bool {
        match result {
            Ok(Some(history)) => {
                self.remove_typing_indicator();
                self.update_messages(history);
                self.update_status(path.success_status(), false, false);
                self.celebrations += 1;
                true
            }
            Ok(None) => {
                self.remove_typing_indicator();
                false
            }
            Err(_) => {
                self.handle_error(path.failure_message());
                false
            }
        }
    }

    /// Surface one failure: drop the placeholder, add an error bubble and
    /// switch the status line to its error state.
    pub fn handle_error(&mut self, message: &str) {
        self.remove_typing_indicator();
        self.add_message(&format!("{ERROR_GLYPH} {message}"), AI_ROLE, None);
        self.update_status(status::ERROR_OCCURRED, true, true);
    }

    /// Claim the recorder for a new capture. False if one is already
    /// starting or running.
    pub fn begin_microphone_request(&mut self) -> bool {
        self.recorder.request()
    }

    pub fn recording_started(&mut self) {
        if self.recorder.started() {
            self.update_status(status::RECORDING, true, false);
        }
    }

    pub fn recording_failed(&mut self) {
        self.recorder.failed();
        self.handle_error(MICROPHONE_DENIED);
    }

    /// Recording → Idle. False when nothing was recording.
    pub fn recording_stopped(&mut self) -> bool {
        self.recorder.stop()
    }
}
