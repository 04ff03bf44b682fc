//! Interval progression indexed by card level.

use chrono::TimeDelta;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default progression in days.
pub const DEFAULT_INTERVAL_DAYS: [u32; 6] = [1, 3, 7, 14, 30, 90];

/// Longest accepted interval (about one hundred years).
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalTableError {
    Empty,
    ZeroInterval { level: usize },
    NotAscending { level: usize, previous: u32, current: u32 },
    TooLong { level: usize, days: u32 },
}

impl Display for IntervalTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "interval table must contain at least one entry"),
            Self::ZeroInterval { level } => {
                write!(f, "interval at level {level} must be at least one day")
            }
            Self::NotAscending {
                level,
                previous,
                current,
            } => write!(
                f,
                "interval at level {level} ({current}d) is shorter than the previous level ({previous}d)"
            ),
            Self::TooLong { level, days } => write!(
                f,
                "interval at level {level} ({days}d) exceeds {MAX_INTERVAL_DAYS} days"
            ),
        }
    }
}

impl Error for IntervalTableError {}

/// Fixed, ordered review intervals in whole days.
///
/// # Invariants
/// - Non-empty and never decreasing.
/// - Every entry is within `[1, MAX_INTERVAL_DAYS]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTable {
    days: Vec<u32>,
}

impl IntervalTable {
    pub fn new(days: Vec<u32>) -> Result<Self, IntervalTableError> {
        if days.is_empty() {
            return Err(IntervalTableError::Empty);
        }
        for (level, &current) in days.iter().enumerate() {
            if current == 0 {
                return Err(IntervalTableError::ZeroInterval { level });
            }
            if current > MAX_INTERVAL_DAYS {
                return Err(IntervalTableError::TooLong {
                    level,
                    days: current,
                });
            }
            if level > 0 && current < days[level - 1] {
                return Err(IntervalTableError::NotAscending {
                    level,
                    previous: days[level - 1],
                    current,
                });
            }
        }
        Ok(Self { days })
    }

    /// Number of levels (`N`).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// False for every constructed table.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Highest reachable level (`N - 1`).
    pub fn max_level(&self) -> usize {
        self.days.len() - 1
    }

    /// Clamps `level` into `[0, N - 1]`.
    pub fn clamp_level(&self, level: usize) -> usize {
        level.min(self.max_level())
    }

    /// Interval in days for `level`, clamped to the top entry.
    pub fn days_at(&self, level: usize) -> u32 {
        self.days[self.clamp_level(level)]
    }

    /// Interval duration for `level`, clamped to the top entry.
    pub fn interval(&self, level: usize) -> TimeDelta {
        TimeDelta::days(i64::from(self.days_at(level)))
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self {
            days: DEFAULT_INTERVAL_DAYS.to_vec(),
        }
    }
}
