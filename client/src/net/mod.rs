//! Networking modules for the conversation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two HTTP submissions and parses their replies, `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
