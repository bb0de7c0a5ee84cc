use anyhow::{Result, anyhow};
use std::env;
use std::path::PathBuf;

use crate::logging::LogConfig;
use crate::shell::history::HistoryConfig;

/// Overrides the data directory (default `~/.passbook`).
pub const HOME_ENV: &str = "PASSBOOK_HOME";
/// Overrides the store file path.
pub const STORE_ENV: &str = "PASSBOOK_STORE";

const DATA_DIR_NAME: &str = ".passbook";
const STORE_FILE: &str = "database.json";
const LOG_FILE: &str = "passbook.log";
const HISTORY_FILE: &str = "history";

/// Resolved file locations for a run of the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub store_path: PathBuf,
    pub log: LogConfig,
    pub history: HistoryConfig,
}

impl AppConfig {
    /// Resolves the configuration from the environment.
    ///
    /// `store_override` (usually the `--store` flag) wins over
    /// `PASSBOOK_STORE`, which wins over `<data dir>/database.json`.
    pub fn resolve(store_override: Option<PathBuf>) -> Result<Self> {
        let store_env = env::var_os(STORE_ENV).map(PathBuf::from);
        Ok(Self::resolve_in(data_dir()?, store_override, store_env))
    }

    fn resolve_in(
        data_dir: PathBuf,
        store_override: Option<PathBuf>,
        store_env: Option<PathBuf>,
    ) -> Self {
        let store_path = store_override
            .or(store_env)
            .unwrap_or_else(|| data_dir.join(STORE_FILE));
        Self::with_paths(data_dir, store_path)
    }

    /// Builds a configuration rooted at `data_dir` with an explicit store.
    pub fn with_paths(data_dir: PathBuf, store_path: PathBuf) -> Self {
        Self {
            log: LogConfig::new(data_dir.join(LOG_FILE)),
            history: HistoryConfig::new(data_dir.join(HISTORY_FILE)),
            store_path,
            data_dir,
        }
    }
}

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs_next::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or_else(|| anyhow!("Could not determine home directory"))
}
