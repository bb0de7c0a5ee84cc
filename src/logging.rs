//! Logging setup for passbook.
//!
//! Records go to a timestamped log file under the data directory. Warnings
//! are echoed to the terminal when there is one. Passwords are never logged.

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::{self, File, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DEFAULT_LOG_FILE: &str = "passbook.log";
const DEFAULT_MAX_SIZE: u64 = 5 * 1024 * 1024;

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub path: PathBuf,
    /// Most verbose level written to the file.
    pub level: LevelFilter,
    /// Size in bytes past which the file is rotated on startup; 0 disables.
    pub max_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            level: LevelFilter::Info,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl LogConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Installs the global logger.
///
/// The file logger records at the configured level with RFC 3339
/// timestamps; the terminal logger only shows warnings and errors so that
/// command output stays readable.
///
/// ```ignore
/// use passbook::logging::{init_logging, LogConfig};
/// use log::LevelFilter;
///
/// let config = LogConfig::new("/tmp/passbook.log".into()).with_level(LevelFilter::Debug);
/// init_logging(&config)?;
/// ```
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let log_file = prepare_log_file(config)?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(config.level, file_config, log_file)];

    if std::io::stderr().is_terminal() {
        let term_config = ConfigBuilder::new()
            .set_time_level(LevelFilter::Off)
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build();
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).context("A global logger is already installed")?;

    log::info!(
        "passbook {} logging to {} at {:?}",
        env!("CARGO_PKG_VERSION"),
        config.path.display(),
        config.level
    );
    Ok(())
}

/// Creates the log directory, rotates an oversized log and opens it for
/// appending.
fn prepare_log_file(config: &LogConfig) -> Result<File> {
    if let Some(parent) = config.path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let size = fs::metadata(&config.path).map(|m| m.len()).unwrap_or(0);
    if config.max_size > 0 && size > config.max_size {
        rotate_log(&config.path)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .with_context(|| format!("Failed to open log file {}", config.path.display()))
}

/// Moves `path` aside as `<name>.<YYYYmmdd_HHMMSS>`.
fn rotate_log(path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    let suffix = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let target = path.with_file_name(format!("{}.{}", name, suffix));

    fs::rename(path, &target)
        .with_context(|| format!("Failed to rotate {}", path.display()))?;
    Ok(())
}

/// Runs `f` and logs how long it took at debug level.
pub fn timed<T, F: FnOnce() -> T>(operation: &str, f: F) -> T {
    let started = Instant::now();
    let value = f();
    log::debug!("'{}' took {:?}", operation, started.elapsed());
    value
}
