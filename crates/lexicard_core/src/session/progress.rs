//! Quiz score counters.

/// Quiz score for the current session.
///
/// # Invariants
/// - `quiz_score <= total_reviews`.
/// - Independent of per-card `reviews`/`correct` counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionProgress {
    quiz_score: u32,
    total_reviews: u32,
}

impl SessionProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one quiz attempt.
    pub fn record_quiz_result(&mut self, correct: bool) {
        self.total_reviews = self.total_reviews.saturating_add(1);
        if correct {
            self.quiz_score = self.quiz_score.saturating_add(1);
        }
    }

    pub fn quiz_score(&self) -> u32 {
        self.quiz_score
    }

    pub fn total_reviews(&self) -> u32 {
        self.total_reviews
    }

    /// `quiz_score / total_reviews`, or `0.0` before the first attempt.
    pub fn accuracy(&self) -> f64 {
        if self.total_reviews == 0 {
            return 0.0;
        }
        f64::from(self.quiz_score) / f64::from(self.total_reviews)
    }

    pub fn accuracy_percent(&self) -> f64 {
        self.accuracy() * 100.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
