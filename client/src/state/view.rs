//! Rendered chat log: bubbles plus the transient typing placeholder.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the view-side projection the `ChatLog` component draws. It is
//! append-only; the typing placeholder is a flag rather than a bubble so it
//! always trails the last message and can never be duplicated.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::util::bubble::{Bubble, render_bubble};

/// Label shown inside the typing placeholder.
pub const TYPING_LABEL: &str = "AI is responding...";

/// Number of animated dots in the typing placeholder.
pub const TYPING_DOTS: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct ChatView {
    pub bubbles: Vec<Bubble>,
    pub typing: bool,
    next_id: u64,
}

impl ChatView {
    /// Append one bubble and return its key.
    pub fn add_message(&mut self, text: &str, role: &str, audio_url: Option<String>, time_label: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.bubbles.push(render_bubble(id, text, role, audio_url, time_label));
        id
    }

    /// Show exactly one typing placeholder at the end of the log.
    pub fn show_typing_indicator(&mut self) {
        self.remove_typing_indicator();
        self.typing = true;
    }

    pub fn remove_typing_indicator(&mut self) {
        self.typing = false;
    }
}
