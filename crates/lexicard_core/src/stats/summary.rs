//! Collection-level study statistics.
//!
//! # Invariants
//! - Accuracy values are percentages in `[0, 100]`.
//! - Unreviewed cards contribute `0` to the average instead of being skipped.

use crate::model::card::Flashcard;
use serde::Serialize;

/// Per-card accuracy row, in collection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordAccuracy {
    pub word: String,
    pub reviews: u32,
    pub accuracy_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardStats {
    pub total_cards: usize,
    /// Sum of per-card review counts (review path only).
    pub total_reviews: u64,
    pub average_accuracy: f64,
    pub per_word_accuracy: Vec<WordAccuracy>,
}

/// Aggregates counters across `cards`.
///
/// An empty collection reports `0.0` average accuracy.
pub fn compute_stats(cards: &[Flashcard]) -> CardStats {
    let per_word_accuracy: Vec<WordAccuracy> = cards
        .iter()
        .map(|card| WordAccuracy {
            word: card.word().to_string(),
            reviews: card.reviews(),
            accuracy_percent: card.accuracy() * 100.0,
        })
        .collect();

    let average_accuracy = if cards.is_empty() {
        0.0
    } else {
        let sum: f64 = cards.iter().map(Flashcard::accuracy).sum();
        sum / cards.len() as f64 * 100.0
    };

    CardStats {
        total_cards: cards.len(),
        total_reviews: cards.iter().map(|card| u64::from(card.reviews())).sum(),
        average_accuracy,
        per_word_accuracy,
    }
}
