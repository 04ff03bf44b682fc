//! Spaced-repetition scheduling.
//!
//! # Responsibility
//! - Decide which cards are due at a given instant.
//! - Apply recall outcomes to card level and next-review time.
//!
//! # Invariants
//! - All functions are pure apart from the card passed to `apply_outcome`.
//! - `apply_outcome` is the only mutation path for scheduling state.

pub mod due;
pub mod outcome;
