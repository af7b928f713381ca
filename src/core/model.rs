// Phonebook - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

// =============================================================================
// Record
// =============================================================================

/// A single contact row from the export.
///
/// Both fields are trimmed and non-empty. The phone text is kept exactly as
/// written in the export; two spellings of the same number stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    phone: String,
    name: String,
}

impl Record {
    /// Build a record from raw captures, trimming both fields.
    ///
    /// Returns `None` if either field is empty after trimming, so a partial
    /// record can never be constructed.
    pub fn new(phone: &str, name: &str) -> Option<Self> {
        let phone = phone.trim();
        let name = name.trim();
        if phone.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            phone: phone.to_string(),
            name: name.to_string(),
        })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Record set
// =============================================================================

/// All records from one successful load, in file order.
///
/// Immutable once built; a later load replaces the whole set.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<Record>,

    /// 1 for the first successful load, incremented on every replacement.
    version: u64,

    /// When the load that produced this set completed.
    loaded_at: DateTime<Utc>,

    /// Export the records were read from.
    source: PathBuf,
}

impl RecordSet {
    pub fn new(records: Vec<Record>, version: u64, source: PathBuf) -> Self {
        Self {
            records,
            version,
            loaded_at: Utc::now(),
            source,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

// =============================================================================
// Load state
// =============================================================================

/// Whether a record set is currently available for queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded,
}

impl LoadState {
    pub fn is_loaded(self) -> bool {
        self == LoadState::Loaded
    }
}
