//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget chrome and read the shared `ChatSession`
//! from the Leptos context provider.

pub mod chat_log;
pub mod composer;
pub mod particles;
pub mod status_bar;
