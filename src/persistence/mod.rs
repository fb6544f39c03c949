//! High score and currency persistence
//!
//! The simulation never touches storage directly; it talks to a [`ScoreStore`]
//! injected into the game loop. Two stores ship with the crate:
//! - [`MemoryStore`]: volatile, for tests and headless runs
//! - [`JsonFileStore`]: a small JSON document on disk

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Failure reading or writing persisted data
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted progress: best survival time and spendable currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    #[serde(default)]
    pub high_score: u32,
    #[serde(default)]
    pub currency: u64,
}

/// Key-value persistence for progress owned by the host
pub trait ScoreStore {
    fn load(&mut self) -> Result<SavedProgress, StoreError>;
    fn save_high_score(&mut self, high_score: u32) -> Result<(), StoreError>;
    fn save_currency(&mut self, currency: u64) -> Result<(), StoreError>;
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub progress: SavedProgress,
}

impl MemoryStore {
    pub fn new(progress: SavedProgress) -> Self {
        Self { progress }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<SavedProgress, StoreError> {
        Ok(self.progress)
    }

    fn save_high_score(&mut self, high_score: u32) -> Result<(), StoreError> {
        self.progress.high_score = high_score;
        Ok(())
    }

    fn save_currency(&mut self, currency: u64) -> Result<(), StoreError> {
        self.progress.currency = currency;
        Ok(())
    }
}

/// JSON document on disk; a missing file reads as fresh progress
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    cached: Option<SavedProgress>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn current(&mut self) -> Result<SavedProgress, StoreError> {
        match self.cached {
            Some(progress) => Ok(progress),
            None => self.load(),
        }
    }

    fn write(&mut self, progress: SavedProgress) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&progress)?;
        // Write-then-rename so a crash never leaves a truncated save
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        self.cached = Some(progress);
        log::info!(
            "Progress saved (high score {}, currency {})",
            progress.high_score,
            progress.currency
        );
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<SavedProgress, StoreError> {
        let progress = match std::fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No saved progress found, starting fresh");
                SavedProgress::default()
            }
            Err(e) => return Err(e.into()),
        };
        self.cached = Some(progress);
        Ok(progress)
    }

    fn save_high_score(&mut self, high_score: u32) -> Result<(), StoreError> {
        let mut progress = self.current()?;
        progress.high_score = high_score;
        self.write(progress)
    }

    fn save_currency(&mut self, currency: u64) -> Result<(), StoreError> {
        let mut progress = self.current()?;
        progress.currency = currency;
        self.write(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("orbit_point_{}_{}.json", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        store.save_high_score(12).unwrap();
        store.save_currency(40).unwrap();
        assert_eq!(
            store.load().unwrap(),
            SavedProgress {
                high_score: 12,
                currency: 40
            }
        );
    }

    #[test]
    fn test_json_store_missing_file_is_fresh() {
        let mut store = JsonFileStore::new(temp_path("missing"));
        assert_eq!(store.load().unwrap(), SavedProgress::default());
    }

    #[test]
    fn test_json_store_persists_across_instances() {
        let path = temp_path("persist");
        {
            let mut store = JsonFileStore::new(&path);
            store.save_currency(7).unwrap();
            store.save_high_score(3).unwrap();
        }
        let mut reopened = JsonFileStore::new(&path);
        let progress = reopened.load().unwrap();
        assert_eq!(progress.high_score, 3);
        assert_eq!(progress.currency, 7);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_json_store_corrupt_file() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json").unwrap();
        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
        let _ = std::fs::remove_file(&path);
    }
}
