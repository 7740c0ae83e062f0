//! Status line shown under the chat log.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

pub const READY: &str = "Ready when you are";
pub const PROCESSING_TEXT: &str = "💬 Processing text input...";
pub const PROCESSING_VOICE: &str = "🔄 Processing voice input...";
pub const RECORDING: &str = "🎤 Recording... Speak now";
pub const TEXT_REPLY_RECEIVED: &str = "✅ Text reply received";
pub const VOICE_REPLY_RECEIVED: &str = "✅ Voice reply received";
pub const ERROR_OCCURRED: &str = "⚠️ Error occurred";

/// Current status text and its two visual flags. Always overwritten whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub active: bool,
    pub error: bool,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self { text: READY.to_owned(), active: false, error: false }
    }
}

impl StatusLine {
    pub fn update(&mut self, text: &str, is_active: bool, is_error: bool) {
        text.clone_into(&mut self.text);
        self.active = is_active;
        self.error = is_error;
    }
}
