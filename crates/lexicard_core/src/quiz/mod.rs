//! Multiple-choice quiz generation.
//!
//! # Responsibility
//! - Build option sets with one correct translation plus random distractors.
//! - Keep randomness injectable so callers can seed it.
//!
//! # Invariants
//! - Quiz generation never mutates cards. Quiz answers are scored by
//!   `session::SessionProgress` only and do not touch per-card counters.
//! - Identical translation texts on different cards are not deduplicated.

pub mod builder;
