//! Card snapshot persistence.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract.
//! - Provide JSON file and SQLite implementations.
//!
//! # Invariants
//! - A missing snapshot loads as an empty collection.
//! - Loaded records are validated; malformed data is a `StorageError`, never
//!   silently defaulted.
//! - Saves replace the snapshot as a unit; readers never see a partial write.

pub mod card_repo;
pub mod json_repo;
pub mod sqlite_repo;
