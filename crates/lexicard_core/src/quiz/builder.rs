//! Quiz option builder.

use crate::model::card::Flashcard;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound on distractors drawn per quiz.
pub const MAX_DISTRACTORS: usize = 3;

pub type QuizResult<T> = Result<T, QuizError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// No card uses the requested word.
    NotFound(String),
    /// Several cards share the requested word, so the answer is ambiguous.
    AmbiguousWord { word: String, matches: usize },
}

impl Display for QuizError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(word) => write!(f, "no card found for word `{word}`"),
            Self::AmbiguousWord { word, matches } => {
                write!(f, "word `{word}` matches {matches} cards")
            }
        }
    }
}

impl Error for QuizError {}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    /// Word shown to the learner.
    pub prompt: String,
    /// Shuffled options; contains `answer` once when translations are distinct.
    pub options: Vec<String>,
    pub answer: String,
}

impl Quiz {
    /// Exact-text comparison against the expected translation.
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.answer
    }

    /// Position of the first option equal to the answer.
    pub fn answer_position(&self) -> Option<usize> {
        self.options.iter().position(|option| option == &self.answer)
    }
}

/// Builds a quiz for `target_word` from the full card set.
///
/// Distractors are `min(3, other cards)` translations drawn without
/// replacement from cards whose word differs from the target. A single-card
/// collection yields a one-option quiz.
///
/// # Errors
/// - `NotFound` when no card matches `target_word`.
/// - `AmbiguousWord` when more than one card matches.
pub fn build_quiz<R: Rng + ?Sized>(
    cards: &[Flashcard],
    target_word: &str,
    rng: &mut R,
) -> QuizResult<Quiz> {
    let mut matches = cards.iter().filter(|card| card.word() == target_word);
    let target = matches
        .next()
        .ok_or_else(|| QuizError::NotFound(target_word.to_string()))?;
    let extra = matches.count();
    if extra > 0 {
        return Err(QuizError::AmbiguousWord {
            word: target_word.to_string(),
            matches: extra + 1,
        });
    }

    let pool: Vec<&str> = cards
        .iter()
        .filter(|card| card.word() != target_word)
        .map(Flashcard::translation)
        .collect();
    let amount = pool.len().min(MAX_DISTRACTORS);

    let mut options = Vec::with_capacity(amount + 1);
    options.push(target.translation().to_string());
    options.extend(
        pool.choose_multiple(rng, amount)
            .map(|translation| (*translation).to_string()),
    );
    options.shuffle(rng);

    Ok(Quiz {
        prompt: target.word().to_string(),
        options,
        answer: target.translation().to_string(),
    })
}

/// Picks a quiz target uniformly from all cards, due or not.
pub fn pick_quiz_target<'a, R: Rng + ?Sized>(
    cards: &'a [Flashcard],
    rng: &mut R,
) -> Option<&'a Flashcard> {
    cards.choose(rng)
}
