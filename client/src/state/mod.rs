//! Client state models.
//!
//! DESIGN
//! ======
//! Plain data with synchronous transitions. `session::ChatSession` composes
//! the rest and is the only value placed in a signal.

pub mod log;
pub mod recorder;
pub mod session;
pub mod status;
pub mod view;
