//! Card collection use-case service.
//!
//! # Responsibility
//! - Own the authoritative in-memory collection for one session.
//! - Validate before mutating and persist after every mutation.
//!
//! # Invariants
//! - A failed validation leaves both memory and snapshot untouched.
//! - Review outcomes go through `scheduler::apply_outcome` only.
//! - Quiz answers never change card counters; callers score them with
//!   `SessionProgress`.
//! - Load -> mutate -> save is last-writer-wins; no cross-process locking.

use crate::model::card::{CardValidationError, Flashcard};
use crate::model::interval::IntervalTable;
use crate::quiz::builder::{build_quiz, pick_quiz_target, Quiz, QuizError};
use crate::repo::card_repo::{CardRepository, StorageError};
use crate::scheduler::due::{due_indices, pick_due};
use crate::scheduler::outcome::{apply_outcome, Transition};
use crate::stats::summary::{compute_stats, CardStats};
use chrono::{DateTime, Utc};
use log::{info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, CardServiceError>;

#[derive(Debug)]
pub enum CardServiceError {
    Validation(CardValidationError),
    Quiz(QuizError),
    Storage(StorageError),
    /// Display index does not address a card.
    UnknownCard(usize),
}

impl Display for CardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Quiz(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::UnknownCard(index) => write!(f, "no card at index {index}"),
        }
    }
}

impl Error for CardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Quiz(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::UnknownCard(_) => None,
        }
    }
}

impl From<CardValidationError> for CardServiceError {
    fn from(value: CardValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<QuizError> for CardServiceError {
    fn from(value: QuizError) -> Self {
        Self::Quiz(value)
    }
}

impl From<StorageError> for CardServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Session-scoped facade over one card collection.
pub struct CardService<R: CardRepository> {
    repo: R,
    table: IntervalTable,
    cards: Vec<Flashcard>,
}

impl<R: CardRepository> CardService<R> {
    /// Loads the snapshot and checks every level against `table`.
    ///
    /// # Errors
    /// - `Storage` for unreadable or malformed snapshots, including a level
    ///   outside `table`.
    pub fn open(repo: R, table: IntervalTable) -> ServiceResult<Self> {
        let cards = repo.load()?;
        for (position, card) in cards.iter().enumerate() {
            if card.level() > table.max_level() {
                return Err(StorageError::InvalidData(format!(
                    "record {position}: {}",
                    CardValidationError::LevelOutOfRange {
                        level: card.level(),
                        max_level: table.max_level(),
                    }
                ))
                .into());
            }
        }
        info!(
            "event=session_open module=service status=ok cards={} levels={}",
            cards.len(),
            table.len()
        );
        Ok(Self { repo, table, cards })
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    pub fn interval_table(&self) -> &IntervalTable {
        &self.table
    }

    /// Adds a new card and persists the collection.
    ///
    /// # Errors
    /// - `Validation` for empty text or a word already in the collection.
    /// - `Storage` when the snapshot cannot be written; the card is not kept.
    pub fn add_card(
        &mut self,
        word: &str,
        translation: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<&Flashcard> {
        let card = Flashcard::new(word, translation, now)?;
        if self.cards.iter().any(|existing| existing.word() == card.word()) {
            return Err(CardValidationError::DuplicateWord(card.word().to_string()).into());
        }

        self.cards.push(card);
        if let Err(err) = self.repo.save(&self.cards) {
            self.cards.pop();
            warn!("event=card_add module=service status=error error={err}");
            return Err(err.into());
        }

        let index = self.cards.len() - 1;
        info!("event=card_add module=service status=ok index={index}");
        Ok(&self.cards[index])
    }

    /// Display indices of cards due at `now`.
    pub fn due_cards(&self, now: DateTime<Utc>) -> Vec<usize> {
        due_indices(&self.cards, now)
    }

    /// Random due card for presentation.
    pub fn pick_due<G: Rng + ?Sized>(
        &self,
        now: DateTime<Utc>,
        rng: &mut G,
    ) -> Option<(usize, &Flashcard)> {
        pick_due(&self.cards, now, rng)
    }

    /// Applies a review outcome to the card at `index`, then persists.
    ///
    /// The in-memory transition stands even when the save fails; the error
    /// reports that the snapshot is stale.
    pub fn record_outcome(
        &mut self,
        index: usize,
        correct: bool,
        now: DateTime<Utc>,
    ) -> ServiceResult<Transition> {
        let card = self
            .cards
            .get_mut(index)
            .ok_or(CardServiceError::UnknownCard(index))?;
        let transition = apply_outcome(card, correct, now, &self.table);
        info!(
            "event=card_review module=service status=ok index={index} correct={correct} from_level={} to_level={}",
            transition.from_level, transition.to_level
        );

        self.repo.save(&self.cards)?;
        Ok(transition)
    }

    /// Builds a quiz for `word`. Does not touch card counters.
    pub fn build_quiz<G: Rng + ?Sized>(&self, word: &str, rng: &mut G) -> ServiceResult<Quiz> {
        Ok(build_quiz(&self.cards, word, rng)?)
    }

    /// Builds a quiz for a random card, or `None` for an empty collection.
    pub fn random_quiz<G: Rng + ?Sized>(&self, rng: &mut G) -> ServiceResult<Option<Quiz>> {
        let Some(target) = pick_quiz_target(&self.cards, rng) else {
            return Ok(None);
        };
        let word = target.word().to_string();
        Ok(Some(build_quiz(&self.cards, &word, rng)?))
    }

    pub fn compute_stats(&self) -> CardStats {
        compute_stats(&self.cards)
    }
}
