//! Flashcard domain model.
//!
//! # Responsibility
//! - Define the word/translation record and its scheduling state.
//! - Validate text fields and counter relationships.
//!
//! # Invariants
//! - `word` and `translation` are non-empty after trimming.
//! - `correct <= reviews`.
//! - Scheduling fields are crate-private; external callers read them through
//!   accessors and change them only via the scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures for card construction and persisted card state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyWord,
    EmptyTranslation,
    /// Another card already uses this prompt word.
    DuplicateWord(String),
    CorrectExceedsReviews { correct: u32, reviews: u32 },
    LevelOutOfRange { level: usize, max_level: usize },
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "word must not be empty"),
            Self::EmptyTranslation => write!(f, "translation must not be empty"),
            Self::DuplicateWord(word) => write!(f, "a card for `{word}` already exists"),
            Self::CorrectExceedsReviews { correct, reviews } => write!(
                f,
                "correct count ({correct}) must be <= review count ({reviews})"
            ),
            Self::LevelOutOfRange { level, max_level } => {
                write!(f, "level {level} is outside interval table (max {max_level})")
            }
        }
    }
}

impl Error for CardValidationError {}

/// One word/translation learning unit with its own scheduling state.
///
/// Serialized field names are the snapshot wire format; every field is
/// required on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    word: String,
    translation: String,
    pub(crate) level: usize,
    #[serde(deserialize_with = "crate::model::timestamp::deserialize")]
    pub(crate) next_review: DateTime<Utc>,
    pub(crate) reviews: u32,
    pub(crate) correct: u32,
}

impl Flashcard {
    /// Creates a fresh card that is due immediately.
    ///
    /// Text is stored trimmed.
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, CardValidationError> {
        let card = Self {
            word: word.into().trim().to_string(),
            translation: translation.into().trim().to_string(),
            level: 0,
            next_review: now,
            reviews: 0,
            correct: 0,
        };
        card.validate()?;
        Ok(card)
    }

    /// Rebuilds a card from stored state.
    ///
    /// Used by storage backends and import paths. Level range is checked
    /// separately against the active interval table.
    pub fn from_parts(
        word: impl Into<String>,
        translation: impl Into<String>,
        level: usize,
        next_review: DateTime<Utc>,
        reviews: u32,
        correct: u32,
    ) -> Result<Self, CardValidationError> {
        let card = Self {
            word: word.into(),
            translation: translation.into(),
            level,
            next_review,
            reviews,
            correct,
        };
        card.validate()?;
        Ok(card)
    }

    /// Checks text and counter invariants.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.word.trim().is_empty() {
            return Err(CardValidationError::EmptyWord);
        }
        if self.translation.trim().is_empty() {
            return Err(CardValidationError::EmptyTranslation);
        }
        if self.correct > self.reviews {
            return Err(CardValidationError::CorrectExceedsReviews {
                correct: self.correct,
                reviews: self.reviews,
            });
        }
        Ok(())
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn next_review(&self) -> DateTime<Utc> {
        self.next_review
    }

    pub fn reviews(&self) -> u32 {
        self.reviews
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Fraction of reviews answered correctly, `0.0` for unreviewed cards.
    pub fn accuracy(&self) -> f64 {
        if self.reviews == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.reviews)
        }
    }
}
