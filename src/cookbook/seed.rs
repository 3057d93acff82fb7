// src/cookbook/seed.rs
//! Start-up seeding of the registry from a JSON file
//!
//! The file holds a JSON array of entry requests in the same shape accepted
//! by `POST /entry`. Each element goes through normal validation, in order.
//! Nothing is ever written back.

use crate::cookbook::registry::Registry;
use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Load entries from `path` into `registry`
///
/// Stops at the first rejected element; entries before it stay registered.
/// Returns the number of entries added.
pub fn load_seed(registry: &Registry, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)?;
    let count = load_seed_str(registry, &content)?;
    info!("Seeded {} entries from {}", count, path.display());
    Ok(count)
}

/// Load entries from a JSON array held in memory
pub fn load_seed_str(registry: &Registry, content: &str) -> Result<usize> {
    let document: Value = serde_json::from_str(content)?;
    let requests = document
        .as_array()
        .ok_or_else(|| Error::Seed("seed document must be a JSON array".to_string()))?;

    for (index, request) in requests.iter().enumerate() {
        registry
            .create(request)
            .map_err(|source| Error::SeedEntry { index, source })?;
    }

    Ok(requests.len())
}
