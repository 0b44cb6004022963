//! Persisted state files and the data structures stored in them.
//!
//! Every state file is a pretty-printed JSON document that is read in full and
//! rewritten in full. The helpers here log each step and map failures to the
//! path-carrying [`StorefrontError`] variants.
//!
//! # Public API
//! - [`read_json_file`] / [`write_json_file`]: Generic load and replace of a state file
//! - [`ListingCache`]: The product ids printed by the last `products` run
//! - [`StoredCartLine`] / [`CartSnapshot`]: The cart as written to `cart.json`
//!
//! # Cache Strategy
//! - **JSON serialization**: Human-readable files for debugging
//! - **Timestamping**: Track when each file was last written
//! - **Ids, not copies**: Stored carts reference catalog ids and are re-resolved on load

use crate::core::error::{Result, StorefrontError};
use crate::core::filter::FilterState;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Read and parse a state file, or `Ok(None)` when it does not exist yet.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    log::debug!("Looking for state file: {}", path.display());

    if !path.exists() {
        log::debug!("State file does not exist: {}", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read state file '{}': {}", path.display(), e);
        StorefrontError::state_read_failed(path, e)
    })?;

    let value = serde_json::from_str(&content).map_err(|e| {
        log::error!("Failed to parse state file '{}': {}", path.display(), e);
        StorefrontError::state_parse_failed(path, e)
    })?;

    Ok(Some(value))
}

/// Serialize `value` and replace the file at `path`, creating parent directories.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            log::error!(
                "Failed to create state directory '{}': {}",
                dir.display(),
                e
            );
            return Err(StorefrontError::state_directory_creation_failed(dir, e));
        }
    }

    let json = serde_json::to_string_pretty(value).map_err(|e| {
        log::error!("Failed to serialize state data: {e}");
        StorefrontError::state_serialization_failed(e)
    })?;

    if let Err(e) = fs::write(path, json) {
        log::error!("Failed to write state file '{}': {}", path.display(), e);
        return Err(StorefrontError::state_write_failed(path, e));
    }

    log::debug!("Wrote state file: {}", path.display());
    Ok(())
}

/// The ids shown by the last product listing, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingCache {
    pub product_ids: Vec<String>,
    pub filter: FilterState,
    pub last_updated: DateTime<Utc>,
}

impl ListingCache {
    pub fn new(product_ids: Vec<String>, filter: FilterState) -> Self {
        Self {
            product_ids,
            filter,
            last_updated: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCartLine {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<StoredCartLine>,
    #[serde(default)]
    pub is_open: bool,
    pub last_updated: DateTime<Utc>,
}

impl Default for CartSnapshot {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            is_open: false,
            last_updated: Utc::now(),
        }
    }
}
