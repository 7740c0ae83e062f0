//! Wire DTOs exchanged with the conversation backend.
//!
//! DESIGN
//! ======
//! Both backend endpoints answer with the same `{ "history": [...] }` shape,
//! so the text and voice paths share one reply type and one parser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role string the backend uses for the local user's turns.
pub const USER_ROLE: &str = "user";

/// Role string the backend uses for assistant turns.
pub const AI_ROLE: &str = "ai";

/// One conversation turn as returned by the backend.
///
/// `role` stays a plain string: the backend is authoritative and any value
/// other than [`USER_ROLE`] is shown as the assistant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// `"user"` or `"ai"`.
    pub role: String,
    /// Rich text body. May embed an `<audio><source src="..."></audio>` reply.
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: USER_ROLE.to_owned(), content: content.into() }
    }

    #[must_use]
    pub fn ai(content: impl Into<String>) -> Self {
        Self { role: AI_ROLE.to_owned(), content: content.into() }
    }
}

/// Reply body of `POST /ask` and `POST /voice-chat`.
///
/// `history` is optional: a body without it is accepted and ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryReply {
    #[serde(default)]
    pub history: Option<Vec<Message>>,
}
