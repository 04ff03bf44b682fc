//! JSON file snapshot backend.
//!
//! The snapshot is a JSON array of card records in display order. Saves write
//! a sibling `.tmp` file and rename it over the snapshot.

use crate::model::card::Flashcard;
use crate::repo::card_repo::{check_loaded, CardRepository, StorageError, StorageResult};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Card repository backed by one JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonCardRepository {
    path: PathBuf,
}

impl JsonCardRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        warn!(
            "event=snapshot_io module=repo status=error backend=json kind={:?}",
            source.kind()
        );
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl CardRepository for JsonCardRepository {
    fn load(&self) -> StorageResult<Vec<Flashcard>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=snapshot_load module=repo status=ok backend=json cards=0 first_run=true");
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(&self.path, err)),
        };

        let cards: Vec<Flashcard> = serde_json::from_str(&content)?;
        for (position, card) in cards.iter().enumerate() {
            check_loaded(position, card)?;
        }

        info!(
            "event=snapshot_load module=repo status=ok backend=json cards={}",
            cards.len()
        );
        Ok(cards)
    }

    fn save(&self, cards: &[Flashcard]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(parent, err))?;
        }

        let json = serde_json::to_string_pretty(cards)?;
        let tmp_path = self.tmp_path();
        let write_tmp = || -> std::io::Result<()> {
            let mut file = File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()
        };
        let committed = write_tmp()
            .map_err(|err| self.io_error(&tmp_path, err))
            .and_then(|()| {
                fs::rename(&tmp_path, &self.path).map_err(|err| self.io_error(&self.path, err))
            });
        if let Err(err) = committed {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }

        info!(
            "event=snapshot_save module=repo status=ok backend=json cards={}",
            cards.len()
        );
        Ok(())
    }
}
