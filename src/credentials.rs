use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What the store keeps for a single website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub email: String,
    pub password: String,
}

impl Entry {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// A website together with its stored entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub website: String,
    pub email: String,
    pub password: String,
}

/// In-memory mapping of website to entry, sorted by website.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    data: BTreeMap<String, Entry>,
}

impl Credentials {
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    pub fn from_map(data: BTreeMap<String, Entry>) -> Self {
        Self { data }
    }

    pub fn as_map(&self) -> &BTreeMap<String, Entry> {
        &self.data
    }

    /// Inserts or replaces the entry for `website`, returning the old one.
    pub fn upsert(&mut self, website: String, entry: Entry) -> Option<Entry> {
        self.data.insert(website, entry)
    }

    pub fn get(&self, website: &str) -> Option<&Entry> {
        self.data.get(website)
    }

    pub fn record(&self, website: &str) -> Option<Record> {
        self.data.get(website).map(|entry| Record {
            website: website.to_string(),
            email: entry.email.clone(),
            password: entry.password.clone(),
        })
    }

    pub fn list(&self) -> Vec<&String> {
        self.data.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
