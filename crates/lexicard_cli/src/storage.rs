//! Runtime storage backend selection.

use anyhow::{Context, Result};
use lexicard_core::db::open_db;
use lexicard_core::{CardRepository, JsonCardRepository, SqliteCardRepository, StorageBackend};
use rusqlite::Connection;
use std::path::Path;

/// Backing store kept alive for the lifetime of the service.
pub enum Storage {
    Json(JsonCardRepository),
    Sqlite(Connection),
}

impl Storage {
    pub fn open(backend: StorageBackend, path: &Path) -> Result<Self> {
        Ok(match backend {
            StorageBackend::Json => Self::Json(JsonCardRepository::new(path)),
            StorageBackend::Sqlite => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
                Self::Sqlite(open_db(path)?)
            }
        })
    }

    pub fn repository(&self) -> Result<Box<dyn CardRepository + '_>> {
        Ok(match self {
            Self::Json(repo) => Box::new(repo.clone()),
            Self::Sqlite(conn) => Box::new(SqliteCardRepository::try_new(conn)?),
        })
    }
}
