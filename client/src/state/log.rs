//! Client-local conversation ledger.
//!
//! DESIGN
//! ======
//! The log exists only to decide which fetched turns are new. Content strings
//! are the dedup key, so the log never holds two entries with the same
//! `content`. Entries are never removed or reordered.

#[cfg(test)]
#[path = "log_test.rs"]
mod log_test;

use std::collections::HashSet;

use crate::net::types::Message;

/// Ordered, append-only record of every message shown this page lifetime.
#[derive(Clone, Debug, Default)]
pub struct ConversationLog {
    entries: Vec<Message>,
    seen: HashSet<String>,
}

impl ConversationLog {
    #[must_use]
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Append `message` unless its content is already logged.
    /// Returns whether the entry was added.
    pub fn append(&mut self, message: Message) -> bool {
        if !self.seen.insert(message.content.clone()) {
            return false;
        }
        self.entries.push(message);
        true
    }

    /// Append every entry of `fetched` whose content is not yet logged,
    /// preserving `fetched` order, and return exactly the appended entries.
    ///
    /// Repeats inside `fetched` collapse onto their first occurrence.
    pub fn reconcile(&mut self, fetched: Vec<Message>) -> Vec<Message> {
        let mut fresh = Vec::new();
        for message in fetched {
            if self.append(message.clone()) {
                fresh.push(message);
            }
        }
        fresh
    }
}
