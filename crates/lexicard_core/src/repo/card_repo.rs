//! Repository contract and storage error taxonomy.

use crate::db::DbError;
use crate::model::card::Flashcard;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type StorageResult<T> = Result<T, StorageError>;

/// Snapshot read/write failure.
#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Db(DbError),
    InvalidData(String),
    /// SQLite connection was not opened through `db::open_db`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "snapshot io error at `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "malformed card snapshot: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted card data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "card database is at schema {actual_version}, expected {expected_version}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-collection snapshot storage.
///
/// Order of the saved slice is the display order and must survive a
/// `save` -> `load` round trip.
pub trait CardRepository {
    fn load(&self) -> StorageResult<Vec<Flashcard>>;
    fn save(&self, cards: &[Flashcard]) -> StorageResult<()>;
}

impl<R: CardRepository + ?Sized> CardRepository for &R {
    fn load(&self) -> StorageResult<Vec<Flashcard>> {
        (**self).load()
    }

    fn save(&self, cards: &[Flashcard]) -> StorageResult<()> {
        (**self).save(cards)
    }
}

impl<R: CardRepository + ?Sized> CardRepository for Box<R> {
    fn load(&self) -> StorageResult<Vec<Flashcard>> {
        (**self).load()
    }

    fn save(&self, cards: &[Flashcard]) -> StorageResult<()> {
        (**self).save(cards)
    }
}

/// Validates one loaded record, tagging failures with its position.
pub(crate) fn check_loaded(position: usize, card: &Flashcard) -> StorageResult<()> {
    card.validate()
        .map_err(|err| invalid_record(position, err))
}

pub(crate) fn invalid_record(position: usize, err: impl Display) -> StorageError {
    StorageError::InvalidData(format!("record {position}: {err}"))
}
