//! Committed-values store
//!
//! Holds the last successfully submitted value set, which is also the reset target.
//! Optionally mirrors it to a JSON file so the baseline survives restarts.

use super::values::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// On-disk shape of the committed values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct CommittedSnapshot {
    values: FormValues,
    committed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct CommittedStore {
    snapshot: CommittedSnapshot,
    path: Option<PathBuf>,
}

impl CommittedStore {
    /// In-memory store seeded with the form defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by `path`; a missing file starts from the defaults
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let snapshot = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            CommittedSnapshot::default()
        };
        Ok(Self {
            snapshot,
            path: Some(path),
        })
    }

    /// Like [`load`](Self::load), but an unreadable file falls back to the defaults
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(&path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Ignoring committed values at {}: {e}", path.display());
                Self {
                    snapshot: CommittedSnapshot::default(),
                    path: Some(path),
                }
            }
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.snapshot.values
    }

    /// When the current values were committed (None for the initial defaults)
    pub fn committed_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.committed_at
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the committed values.
    ///
    /// The in-memory commit always happens; a returned error only means the
    /// file mirror could not be written.
    pub fn commit(&mut self, values: FormValues) -> Result<(), StoreError> {
        self.snapshot = CommittedSnapshot {
            values,
            committed_at: Some(Utc::now()),
        };
        tracing::info!("Committed values updated");
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(&self.snapshot)?;
            fs::write(path, content)?;
        }
        Ok(())
    }
}
