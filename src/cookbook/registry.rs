// src/cookbook/registry.rs

//! The entry registry
//!
//! A single map from name to [`Entry`] guarded by one read-write lock.
//! Writers (creation) hold the write lock across validation and insertion so
//! a name check can never race another insert. Readers (lookup, resolution,
//! summaries) hold the read lock for their whole traversal and so never see a
//! half-inserted entry.
//!
//! Entries are immutable once stored and there is no removal. Lookups hand
//! out clones.

use crate::cookbook::entry::Entry;
use crate::cookbook::error::{SummaryError, ValidationError};
use crate::cookbook::resolve::{self, Resolution};
use crate::cookbook::summary::{self, Summary};
use crate::cookbook::validate::validate_entry;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Process-wide store of entries, created once and shared by reference
#[derive(Debug, Default)]
pub struct Registry {
    entries: RwLock<HashMap<String, Entry>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw creation request and insert the resulting entry
    ///
    /// Either the whole entry is stored or the registry is left untouched.
    pub fn create(&self, request: &Value) -> Result<Entry, ValidationError> {
        let mut entries = self.entries.write();
        let entry = validate_entry(request, |name| entries.contains_key(name))?;

        debug!("Registering {} '{}'", entry.kind(), entry.name());
        entries.insert(entry.name().to_string(), entry.clone());
        Ok(entry)
    }

    /// Insert an already well-formed entry
    pub fn insert(&self, entry: Entry) -> Result<(), ValidationError> {
        let mut entries = self.entries.write();
        if entries.contains_key(entry.name()) {
            return Err(ValidationError::DuplicateName(entry.name().to_string()));
        }

        debug!("Registering {} '{}'", entry.kind(), entry.name());
        entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    /// Look up an entry by exact name
    pub fn lookup(&self, name: &str) -> Option<Entry> {
        self.entries.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Expand one unit of `name` into base ingredients and cook time
    pub fn resolve(&self, name: &str) -> Result<Resolution, SummaryError> {
        let entries = self.entries.read();
        resolve::resolve(&entries, name)
    }

    /// Summarize the recipe registered as `name`
    pub fn summary(&self, name: &str) -> Result<Summary, SummaryError> {
        let entries = self.entries.read();
        summary::summarize(&entries, name)
    }
}
