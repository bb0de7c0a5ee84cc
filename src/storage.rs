//! On-disk representation of the credential store.
//!
//! The store is a single JSON object mapping website to entry, written with
//! four-space indentation. Writes replace the whole file through a temporary
//! file in the same directory so a crash never leaves it truncated.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::credentials::{Credentials, Entry};
use crate::error::StoreError;

const INDENT: &[u8] = b"    ";

/// Reads the store file, returning `None` when it is absent or blank.
pub fn read_store(path: &Path) -> Result<Option<Credentials>, StoreError> {
    let file_content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if file_content.trim().is_empty() {
        return Ok(None);
    }
    let data: BTreeMap<String, Entry> = serde_json::from_str(&file_content)?;
    Ok(Some(Credentials::from_map(data)))
}

/// Loads the store, treating an absent file as an empty mapping.
pub fn load(path: &Path) -> Result<Credentials, StoreError> {
    Ok(read_store(path)?.unwrap_or_default())
}

/// Replaces the store file with `credentials`.
pub fn store(path: &Path, credentials: &Credentials) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let json = to_json(credentials)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&json)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    log::debug!("Wrote {} records to {}", credentials.len(), path.display());
    Ok(())
}

fn to_json(credentials: &Credentials) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    credentials.as_map().serialize(&mut serializer)?;
    Ok(buf)
}
