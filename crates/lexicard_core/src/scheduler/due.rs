//! Due-card selection.

use crate::model::card::Flashcard;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Returns true when `card` should be reviewed at `now`.
pub fn is_due(card: &Flashcard, now: DateTime<Utc>) -> bool {
    card.next_review <= now
}

/// Lazily yields cards due at `now`, in collection order.
pub fn select_due(
    cards: &[Flashcard],
    now: DateTime<Utc>,
) -> impl Iterator<Item = &Flashcard> + '_ {
    cards.iter().filter(move |card| is_due(card, now))
}

/// Display indices of cards due at `now`.
pub fn due_indices(cards: &[Flashcard], now: DateTime<Utc>) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| is_due(card, now))
        .map(|(index, _)| index)
        .collect()
}

/// Picks one due card uniformly at random.
///
/// Returns the card with its display index, or `None` when nothing is due.
pub fn pick_due<'a, R: Rng + ?Sized>(
    cards: &'a [Flashcard],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<(usize, &'a Flashcard)> {
    let due = due_indices(cards, now);
    if due.is_empty() {
        return None;
    }
    let index = due[rng.random_range(0..due.len())];
    Some((index, &cards[index]))
}
