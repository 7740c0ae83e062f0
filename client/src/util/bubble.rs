//! Pure rendering of conversation turns into chat bubbles.
//!
//! DESIGN
//! ======
//! `render_bubble` turns a role-tagged payload into a `Bubble` value with no
//! DOM access. The `ChatLog` component is the only place bubbles become
//! elements, so everything here runs in plain unit tests.

#[cfg(test)]
#[path = "bubble_test.rs"]
mod bubble_test;

use std::sync::LazyLock;

use chrono::Timelike;
use regex::Regex;

use crate::net::types::USER_ROLE;

static AUDIO_SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<source src="([^"]+)""#).expect("audio source pattern is valid"));

/// Which side of the log a bubble sits on; doubles as its CSS modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    User,
    Ai,
}

impl Side {
    #[must_use]
    pub fn for_role(role: &str) -> Self {
        if role == USER_ROLE { Self::User } else { Self::Ai }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }
}

/// Avatar glyph shown next to a bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Avatar {
    Person,
    Robot,
}

impl Avatar {
    #[must_use]
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::User => Self::Person,
            Side::Ai => Self::Robot,
        }
    }

    /// Font Awesome classes for the `<i>` element.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Person => "fas fa-user-astronaut",
            Self::Robot => "fas fa-robot",
        }
    }
}

/// A rendered chat bubble, ready for the view adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bubble {
    /// Stable key for keyed list rendering; unique within one `ChatView`.
    pub id: u64,
    pub side: Side,
    pub avatar: Avatar,
    /// Inserted as raw HTML. Backend content is trusted.
    pub html: String,
    /// Source for an inline `<audio controls>` player.
    pub audio_url: Option<String>,
    /// Uppercase `hh:mm AM/PM` stamp.
    pub time_label: String,
}

/// Build the bubble for one payload.
#[must_use]
pub fn render_bubble(id: u64, text: &str, role: &str, audio_url: Option<String>, time_label: String) -> Bubble {
    let side = Side::for_role(role);
    Bubble { id, side, avatar: Avatar::for_side(side), html: text.to_owned(), audio_url, time_label }
}

/// Pull the first `<source src="...">` URL out of message content.
#[must_use]
pub fn extract_audio_url(content: &str) -> Option<String> {
    AUDIO_SOURCE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Format a wall-clock time as a two-digit 12-hour stamp, e.g. `"03:07 PM"`.
#[must_use]
pub fn format_time_label<T: Timelike>(time: &T) -> String {
    let (is_pm, hour) = time.hour12();
    let meridiem = if is_pm { "pm" } else { "am" };
    format!("{hour:02}:{:02} {meridiem}", time.minute()).to_uppercase()
}

/// Stamp for "now" in the browser's local time zone.
#[must_use]
pub fn local_time_label() -> String {
    format_time_label(&chrono::Local::now())
}
