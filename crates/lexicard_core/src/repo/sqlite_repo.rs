//! SQLite snapshot backend.
//!
//! # Invariants
//! - `position` is the display index; rows load ordered by it.
//! - `save` replaces every row inside one transaction.
//! - Timestamps are stored as RFC 3339 text with nanosecond precision.

use crate::db::migrations::latest_version;
use crate::model::card::Flashcard;
use crate::model::timestamp::parse_timestamp;
use crate::repo::card_repo::{invalid_record, CardRepository, StorageError, StorageResult};
use chrono::SecondsFormat;
use log::info;
use rusqlite::{params, Connection, Row};

/// Card repository over a migrated SQLite connection.
pub struct SqliteCardRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCardRepository<'conn> {
    /// Wraps a connection returned by `db::open_db` / `db::open_db_in_memory`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(StorageError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

/// Raw row before timestamp parsing and validation.
struct CardRow {
    word: String,
    translation: String,
    level: i64,
    next_review: String,
    reviews: i64,
    correct: i64,
}

impl CardRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            word: row.get("word")?,
            translation: row.get("translation")?,
            level: row.get("level")?,
            next_review: row.get("next_review")?,
            reviews: row.get("reviews")?,
            correct: row.get("correct")?,
        })
    }

    fn into_card(self, position: usize) -> StorageResult<Flashcard> {
        let next_review = parse_timestamp(&self.next_review).map_err(|err| {
            invalid_record(
                position,
                format!("invalid next_review `{}`: {err}", self.next_review),
            )
        })?;
        let level = usize::try_from(self.level)
            .map_err(|_| invalid_record(position, format!("invalid level {}", self.level)))?;
        let reviews = u32::try_from(self.reviews)
            .map_err(|_| invalid_record(position, format!("invalid reviews {}", self.reviews)))?;
        let correct = u32::try_from(self.correct)
            .map_err(|_| invalid_record(position, format!("invalid correct {}", self.correct)))?;

        Flashcard::from_parts(
            self.word,
            self.translation,
            level,
            next_review,
            reviews,
            correct,
        )
        .map_err(|err| invalid_record(position, err))
    }
}

impl CardRepository for SqliteCardRepository<'_> {
    fn load(&self) -> StorageResult<Vec<Flashcard>> {
        let mut stmt = self.conn.prepare(
            "SELECT word, translation, level, next_review, reviews, correct
             FROM flashcards
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut cards = Vec::new();

        while let Some(row) = rows.next()? {
            let position = cards.len();
            cards.push(CardRow::read(row)?.into_card(position)?);
        }

        info!(
            "event=snapshot_load module=repo status=ok backend=sqlite cards={}",
            cards.len()
        );
        Ok(cards)
    }

    fn save(&self, cards: &[Flashcard]) -> StorageResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM flashcards;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO flashcards (
                    position, word, translation, level, next_review, reviews, correct
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            )?;
            for (position, card) in cards.iter().enumerate() {
                insert.execute(params![
                    position as i64,
                    card.word(),
                    card.translation(),
                    card.level() as i64,
                    card.next_review()
                        .to_rfc3339_opts(SecondsFormat::Nanos, true),
                    i64::from(card.reviews()),
                    i64::from(card.correct()),
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "event=snapshot_save module=repo status=ok backend=sqlite cards={}",
            cards.len()
        );
        Ok(())
    }
}
