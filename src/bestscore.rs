//! Persisted best score
//!
//! One scalar under a fixed storage key, read once at startup and written
//! on every run that beats it. Loading never fails the game: a missing or
//! corrupt file just starts the counter over.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key: file stem under the platform data directory
pub const STORAGE_KEY: &str = "health_dash_best";

/// Why a best-score read or write failed
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed store: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no platform data directory")]
    NoDataDir,
}

/// The single persisted high-water mark
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u64,
}

impl BestScore {
    /// Would this score update the stored value?
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.score
    }

    /// Record a finished run. Only a strictly greater score updates the
    /// value; recording the same or a smaller score is a no-op. Returns
    /// whether the value changed.
    pub fn record(&mut self, score: u64) -> bool {
        if self.qualifies(score) {
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Load from the platform data directory, falling back to zero
    pub fn load() -> Self {
        match Self::default_path().and_then(|path| Self::read_from(&path)) {
            Ok(best) => {
                log::info!("loaded best score {}", best.score);
                best
            }
            Err(err) => {
                log::info!("no stored best score ({err}); starting fresh");
                Self::default()
            }
        }
    }

    /// Save to the platform data directory, logging on failure
    pub fn save(&self) {
        match Self::default_path().and_then(|path| self.write_to(&path)) {
            Ok(()) => log::info!("best score {} saved", self.score),
            Err(err) => log::warn!("failed to save best score: {err}"),
        }
    }

    /// Read a stored value from an explicit path
    pub fn read_from(path: &Path) -> Result<Self, StoreError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the value to an explicit path, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }

    fn default_path() -> Result<PathBuf, StoreError> {
        let dirs = ProjectDirs::from("", "", "health-dash").ok_or(StoreError::NoDataDir)?;
        Ok(dirs.data_dir().join(format!("{STORAGE_KEY}.json")))
    }
}
