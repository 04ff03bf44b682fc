//! Spaced-repetition core for Lexicard.
//! This crate is the single source of truth for card scheduling invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod quiz;
pub mod repo;
pub mod scheduler;
pub mod service;
pub mod session;
pub mod stats;

pub use config::{ConfigError, LexicardConfig, StorageBackend};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::card::{CardValidationError, Flashcard};
pub use model::interval::{
    IntervalTable, IntervalTableError, DEFAULT_INTERVAL_DAYS, MAX_INTERVAL_DAYS,
};
pub use quiz::builder::{build_quiz, pick_quiz_target, Quiz, QuizError, QuizResult};
pub use repo::card_repo::{CardRepository, StorageError, StorageResult};
pub use repo::json_repo::JsonCardRepository;
pub use repo::sqlite_repo::SqliteCardRepository;
pub use scheduler::due::{due_indices, is_due, pick_due, select_due};
pub use scheduler::outcome::{apply_outcome, Transition};
pub use service::card_service::{CardService, CardServiceError, ServiceResult};
pub use session::progress::SessionProgress;
pub use stats::summary::{compute_stats, CardStats, WordAccuracy};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
