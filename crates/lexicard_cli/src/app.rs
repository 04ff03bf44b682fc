//! Startup wiring: paths, config, logging and storage selection.

use crate::storage::Storage;
use crate::BackendArg;
use anyhow::{Context, Result};
use lexicard_core::{
    default_log_level, init_logging, CardRepository, CardService, IntervalTable, LexicardConfig,
    StorageBackend,
};
use log::info;
use std::path::PathBuf;

pub type Service<'s> = CardService<Box<dyn CardRepository + 's>>;

const CONFIG_FILE_NAME: &str = "lexicard.toml";
const DATA_DIR_NAME: &str = "lexicard";

pub struct App {
    config: LexicardConfig,
    table: IntervalTable,
    snapshot_path: PathBuf,
}

impl App {
    /// Resolves paths, loads config and starts logging.
    pub fn bootstrap(
        data: Option<PathBuf>,
        config_path: Option<PathBuf>,
        backend: Option<BackendArg>,
    ) -> Result<Self> {
        let data_dir = absolute(data.unwrap_or_else(default_data_dir))?;
        let config_path = config_path.unwrap_or_else(|| data_dir.join(CONFIG_FILE_NAME));
        let mut config = LexicardConfig::load_or_default(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?;

        if let Some(backend) = backend {
            config.storage.backend = match backend {
                BackendArg::Json => StorageBackend::Json,
                BackendArg::Sqlite => StorageBackend::Sqlite,
            };
        }

        let log_dir = absolute(
            config
                .logging
                .dir
                .clone()
                .unwrap_or_else(|| data_dir.join("logs")),
        )?;
        let level = config
            .logging
            .level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, &log_dir).context("starting logging")?;

        let table = config.interval_table()?;
        let snapshot_path = absolute(config.snapshot_path(&data_dir))?;
        info!(
            "event=cli_start module=cli status=ok backend={:?} levels={}",
            config.storage.backend,
            table.len()
        );

        Ok(Self {
            config,
            table,
            snapshot_path,
        })
    }

    pub fn open_storage(&self) -> Result<Storage> {
        Storage::open(self.config.storage.backend, &self.snapshot_path)
    }

    pub fn open_service<'s>(&self, storage: &'s Storage) -> Result<Service<'s>> {
        let repo = storage.repository()?;
        CardService::open(repo, self.table.clone())
            .with_context(|| format!("opening {}", self.snapshot_path.display()))
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".lexicard"))
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    Ok(std::env::current_dir()?.join(path))
}
