//! Domain model for word/translation learning cards.
//!
//! # Responsibility
//! - Define the canonical card record persisted in snapshots.
//! - Define the shared interval progression used by the scheduler.
//!
//! # Invariants
//! - Card scheduling state is mutated only through `scheduler::apply_outcome`.
//! - `level` always indexes a valid interval table entry.

pub mod card;
pub mod interval;
pub mod timestamp;
