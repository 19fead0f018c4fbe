//! Local persistence helpers for stores and settings.
//!
//! Web builds use `window.localStorage`. Native builds keep one JSON file per
//! key under the application data directory (see [`FileStore`]).

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected the write")]
    Rejected,
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_string(key: &str) -> Result<Option<String>, StorageError> {
    backend::read(key)
}

pub fn save_string(key: &str, value: &str) -> Result<(), StorageError> {
    backend::write(key, value)
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    match load_string(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    save_string(key, &raw)
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    pub(super) fn read(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    pub(super) fn write(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::{FileStore, StorageError};

    pub(super) fn read(key: &str) -> Result<Option<String>, StorageError> {
        FileStore::from_config()?.read(key)
    }

    pub(super) fn write(key: &str, value: &str) -> Result<(), StorageError> {
        FileStore::from_config()?.write(key, value)
    }
}

/// File-per-key store used on desktop.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the configured data directory.
    pub fn from_config() -> Result<Self, StorageError> {
        Ok(Self::new(data_dir()?))
    }

    pub fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;
        // Atomic replace: readers see either the old or the new value.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn path_for(&self, key: &str) -> std::path::PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{sanitized}.json"))
    }
}

/// Application data directory (config override or the platform default).
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> Result<std::path::PathBuf, StorageError> {
    if let Some(dir) = crate::core::config::app_config().data_dir_override.as_ref() {
        return Ok(std::path::PathBuf::from(dir));
    }
    directories::ProjectDirs::from("com", "InsightBoard", "InsightBoard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::Unavailable)
}
