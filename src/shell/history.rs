//! Command history settings for the shell.

use anyhow::Result;
use rustyline::Config;
use std::path::PathBuf;

/// Configuration for command history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the history file.
    pub path: PathBuf,
    /// Maximum number of entries to keep.
    pub max_entries: usize,
    /// Whether to ignore duplicate consecutive entries.
    pub ignore_dups: bool,
    /// Whether to ignore entries starting with whitespace.
    pub ignore_space: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("history"),
            max_entries: 1000,
            ignore_dups: true,
            ignore_space: true,
        }
    }
}

impl HistoryConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    /// Builds the rustyline editor configuration for these settings.
    ///
    /// Entries are added to history explicitly by the shell, never
    /// automatically, so that lines carrying a password can be skipped.
    pub fn editor_config(&self) -> Result<Config> {
        let config = Config::builder()
            .max_history_size(self.max_entries)?
            .history_ignore_dups(self.ignore_dups)?
            .history_ignore_space(self.ignore_space)
            .auto_add_history(false)
            .build();
        Ok(config)
    }
}
