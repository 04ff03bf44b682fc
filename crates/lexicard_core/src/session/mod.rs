//! Ephemeral study-session state.
//!
//! Owned by the presentation shell and reset per session; nothing here is
//! persisted.

pub mod progress;
