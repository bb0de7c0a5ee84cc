//! The credential store: validated saves and lookups against a single file.

use std::path::{Path, PathBuf};

use crate::credentials::{Credentials, Entry, Record};
use crate::error::{NotFoundError, StoreError, ValidationError};
use crate::password::validate_password;
use crate::storage;

/// Saves and finds website credentials in the file at `path`.
///
/// Each operation reads the whole file, so two stores pointing at the same
/// path always agree on what is saved.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record; an absent store yields an empty mapping.
    pub fn load(&self) -> Result<Credentials, StoreError> {
        storage::load(&self.path)
    }

    /// Replaces the store file with `credentials`.
    pub fn store(&self, credentials: &Credentials) -> Result<(), StoreError> {
        storage::store(&self.path, credentials)
    }

    /// Saves a record, replacing any existing record for `website`.
    ///
    /// Fails with [`ValidationError::EmptyField`] when any field is empty,
    /// or with the password's validation error, and leaves the file
    /// untouched in both cases.
    pub fn save(&self, website: &str, email: &str, password: &str) -> Result<(), StoreError> {
        if website.is_empty() || email.is_empty() || password.is_empty() {
            log::warn!("Rejected save: empty field");
            return Err(ValidationError::EmptyField.into());
        }
        if let Err(e) = validate_password(password) {
            log::warn!("Rejected save for '{}': {}", website, e.category());
            return Err(e.into());
        }

        let mut credentials = self.load()?;
        let replaced = credentials.upsert(website.to_string(), Entry::new(email, password));
        self.store(&credentials)?;

        if replaced.is_some() {
            log::info!("Replaced credentials for '{}'", website);
        } else {
            log::info!("Saved credentials for '{}'", website);
        }
        Ok(())
    }

    /// Finds the record for `website`.
    pub fn find(&self, website: &str) -> Result<Record, StoreError> {
        let credentials = storage::read_store(&self.path)?.ok_or(NotFoundError::NoData)?;
        match credentials.record(website) {
            Some(record) => {
                log::info!("Retrieved credentials for '{}'", website);
                Ok(record)
            }
            None => {
                log::debug!("No credentials for '{}'", website);
                Err(NotFoundError::NoEntry(website.to_string()).into())
            }
        }
    }

    /// Sorted website names currently in the store.
    pub fn websites(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.load()?.list().into_iter().cloned().collect())
    }
}
