//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::submission::DEFAULT_SUBMIT_DELAY;

/// Environment override for the simulated submission delay
const SUBMIT_DELAY_ENV: &str = "ASSESSMENT_SUBMIT_DELAY_MS";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "assessment_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Keep committed values across restarts
    pub persist_committed: Option<bool>,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: Option<String>,
    /// Delay override from the environment that was not a number
    #[serde(skip)]
    rejected_delay_override: Option<String>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "assessment", "assessment-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file and persisted committed values
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        config.apply_delay_override(std::env::var(SUBMIT_DELAY_ENV).ok());
        Ok(config)
    }

    /// Apply a raw delay override; non-numeric values are kept aside and ignored
    fn apply_delay_override(&mut self, raw: Option<String>) {
        let Some(value) = raw else { return };
        match value.trim().parse() {
            Ok(ms) => self.submit_delay_ms = Some(ms),
            Err(_) => self.rejected_delay_override = Some(value),
        }
    }

    /// Log settings that were ignored while loading; call once logging is up
    pub fn report_ignored(&self) {
        if let Some(value) = &self.rejected_delay_override {
            tracing::warn!("Ignoring {SUBMIT_DELAY_ENV}={value}: not a number");
        }
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    pub fn persist_committed(&self) -> bool {
        self.persist_committed.unwrap_or(false)
    }

    /// Where committed values are mirrored, when persistence is enabled
    pub fn committed_path(&self) -> Option<PathBuf> {
        if self.persist_committed() {
            Self::data_dir().map(|dir| dir.join("committed.json"))
        } else {
            None
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
