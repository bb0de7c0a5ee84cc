//! Passbook - a local password generator and website credential store.
//!
//! The two core pieces are [`password`], which generates passwords that
//! satisfy a fixed validity predicate, and [`store::CredentialStore`], which
//! saves and finds website records in a single JSON file. Everything else is
//! the terminal front-end around them.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod password;
pub mod shell;
pub mod storage;
pub mod store;
pub mod trie;

pub use config::AppConfig;
pub use credentials::{Credentials, Entry, Record};
pub use error::{NotFoundError, StoreError, ValidationError};
pub use logging::{LogConfig, init_logging};
pub use shell::Shell;
pub use store::CredentialStore;
pub use trie::Trie;
