//! Pure helpers and browser seams used by state and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bubble` and `effects` are pure and run on both targets. `recorder` holds
//! the microphone traits plus the `MediaRecorder` adapter compiled only for
//! the browser.

pub mod bubble;
pub mod effects;
pub mod recorder;
