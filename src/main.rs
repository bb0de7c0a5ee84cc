use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use passbook::cli::{self, Cli};
use passbook::{AppConfig, CredentialStore, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::resolve(cli.store.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let mut log_config = config.log.clone();
    if cli.verbose {
        log_config = log_config.with_level(LevelFilter::Debug);
    }
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let store = CredentialStore::new(&config.store_path);
    match cli::run(cli.command, &store, &config, !cli.no_copy) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
