//! Read-only reporting over the card collection.

pub mod summary;
