use super::files::{atomic_write, ensure_dir};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SETTINGS_KEY: &str = "settings";
pub const TASKS_KEY: &str = "tasks";
pub const FOCUS_BY_DAY_KEY: &str = "focusByDay";
pub const TASKS_DONE_BY_DAY_KEY: &str = "tasksDoneByDay";
pub const STREAK_KEY: &str = "streak";

/// Why a stored value could not be read
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no value stored under {0}")]
    Missing(String),
    #[error("failed to read {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed value under {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON key-value store, one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open (and create if needed) a store rooted at `dir`
    pub fn open(dir: &Path) -> Result<Self> {
        ensure_dir(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the value under `key`
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let path = self.key_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::Missing(key.to_string()))
            }
            Err(source) => {
                return Err(StoreError::Io {
                    key: key.to_string(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })
    }

    /// Read the value under `key`, falling back to `default` when it is absent or unreadable
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(value) => value,
            Err(StoreError::Missing(_)) => default,
            Err(e) => {
                log::warn!("{}; using default", e);
                default
            }
        }
    }

    /// Write `value` under `key`
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", key))?;
        atomic_write(self.key_path(key), &json)
    }
}
