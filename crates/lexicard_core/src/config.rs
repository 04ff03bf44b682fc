//! Application configuration.
//!
//! # Responsibility
//! - Parse the optional `lexicard.toml` file.
//! - Provide defaults for every section so an absent file is valid.
//!
//! # Invariants
//! - A loaded config always carries a valid interval table.

use crate::model::interval::{IntervalTable, IntervalTableError, DEFAULT_INTERVAL_DAYS};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default snapshot file name inside the data directory.
pub const DEFAULT_SNAPSHOT_FILE: &str = "flashcards.json";
/// Default SQLite file name inside the data directory.
pub const DEFAULT_DATABASE_FILE: &str = "flashcards.sqlite3";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Invalid(IntervalTableError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Invalid(err) => write!(f, "invalid schedule: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<IntervalTableError> for ConfigError {
    fn from(value: IntervalTableError) -> Self {
        Self::Invalid(value)
    }
}

/// Snapshot storage backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
}

impl StorageBackend {
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => DEFAULT_SNAPSHOT_FILE,
            Self::Sqlite => DEFAULT_DATABASE_FILE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    pub intervals_days: Vec<u32>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            intervals_days: DEFAULT_INTERVAL_DAYS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Snapshot location; the caller picks a data-dir default when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `trace|debug|info|warn|error`; build-mode default when unset.
    pub level: Option<String>,
    pub dir: Option<PathBuf>,
}

/// Parsed `lexicard.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexicardConfig {
    pub schedule: ScheduleConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl LexicardConfig {
    /// Parses TOML text and validates the interval table.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.interval_table()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn interval_table(&self) -> Result<IntervalTable, IntervalTableError> {
        IntervalTable::new(self.schedule.intervals_days.clone())
    }

    /// Snapshot path, resolved against `data_dir` when not configured.
    pub fn snapshot_path(&self, data_dir: &Path) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| data_dir.join(self.storage.backend.default_file_name()))
    }
}
