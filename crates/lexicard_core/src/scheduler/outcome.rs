//! Recall outcome state transition.
//!
//! Level is a saturating counter over `[0, N - 1]`: a correct answer moves it
//! up one step, a miss moves it down one step. `next_review` is recomputed
//! from the post-transition level on every call.

use crate::model::card::Flashcard;
use crate::model::interval::IntervalTable;
use chrono::{DateTime, Utc};

/// Summary of one applied outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from_level: usize,
    pub to_level: usize,
    pub next_review: DateTime<Utc>,
}

/// Applies a review outcome to `card` at `now`.
///
/// # Contract
/// - `reviews` always increments; `correct` increments only when `correct`.
/// - Correct: `level = min(level + 1, N - 1)`.
/// - Incorrect: `level = max(level - 1, 0)`.
/// - `next_review = now + table[level]` using the new level, saturating at
///   the latest representable instant.
/// - Never fails.
pub fn apply_outcome(
    card: &mut Flashcard,
    correct: bool,
    now: DateTime<Utc>,
    table: &IntervalTable,
) -> Transition {
    let from_level = table.clamp_level(card.level);
    let to_level = if correct {
        table.clamp_level(from_level + 1)
    } else {
        from_level.saturating_sub(1)
    };

    card.reviews = card.reviews.saturating_add(1);
    if correct {
        card.correct = card.correct.saturating_add(1);
    }
    card.level = to_level;
    card.next_review = now
        .checked_add_signed(table.interval(to_level))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    Transition {
        from_level,
        to_level,
        next_review: card.next_review,
    }
}
