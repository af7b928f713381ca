// Phonebook - app/store.rs
//
// Record store: owns the currently loaded record set and answers sample
// and search requests against it.
//
// Concurrency model:
// - `load()` is serialised by `load_guard`, so two loads never interleave
//   their read-and-replace steps.
// - The record set lives behind an `RwLock<Option<Arc<RecordSet>>>`. Readers
//   clone the `Arc` under a short read lock and compute outside it; a load
//   swaps the `Arc` only after parsing has fully succeeded.
// - A failed load leaves the previous set (or the unloaded state) untouched.

use crate::core::model::{LoadState, Record, RecordSet};
use crate::core::{parser, sample, search};
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{LoadError, QueryError};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Summary of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Records now held by the store.
    pub records: usize,
    /// Version of the new record set.
    pub version: u64,
}

/// Guarded, versioned container for the contact records.
#[derive(Debug)]
pub struct RecordStore {
    source: PathBuf,
    current: RwLock<Option<Arc<RecordSet>>>,
    load_guard: Mutex<()>,
}

impl RecordStore {
    /// Create an unloaded store that reads from `source` on `load()`.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            current: RwLock::new(None),
            load_guard: Mutex::new(()),
        }
    }

    /// Path of the export this store loads from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Read and parse the export, replacing the held record set on success.
    pub fn load(&self) -> Result<LoadReport, LoadError> {
        // The guarded data is `()`; a poisoned guard carries no broken state.
        let _guard = self
            .load_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let content = match fs::read_file_utf8(&self.source) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "Contact export load failed; keeping previous data");
                return Err(e);
            }
        };
        let parsed = parser::parse_content(&content);

        let version = self.version().map_or(1, |v| v + 1);
        let set = Arc::new(RecordSet::new(parsed.records, version, self.source.clone()));
        let report = LoadReport {
            records: set.len(),
            version,
        };

        tracing::info!(
            source = %self.source.display(),
            records = report.records,
            version,
            loaded_at = %set.loaded_at(),
            "Contact export loaded"
        );

        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(set);

        Ok(report)
    }

    /// Snapshot of the current record set, if any.
    fn snapshot(&self) -> Option<Arc<RecordSet>> {
        // Record sets are immutable once published, so a poisoned lock still
        // holds a consistent value.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> LoadState {
        if self.snapshot().is_some() {
            LoadState::Loaded
        } else {
            LoadState::Unloaded
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state().is_loaded()
    }

    /// Number of records held, or `None` if nothing is loaded.
    pub fn record_count(&self) -> Option<usize> {
        self.snapshot().map(|set| set.len())
    }

    /// Version of the held record set, or `None` if nothing is loaded.
    pub fn version(&self) -> Option<u64> {
        self.snapshot().map(|set| set.version())
    }

    /// Random selection of up to `n` distinct records using the thread RNG.
    pub fn sample(&self, n: usize) -> Result<Vec<Record>, QueryError> {
        self.sample_with(&mut rand::rng(), n)
    }

    /// Random selection of up to `n` distinct records using `rng`.
    ///
    /// Each call draws independently; nothing is cached between calls.
    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<Vec<Record>, QueryError> {
        let set = self.snapshot().ok_or(QueryError::NotReady)?;
        if set.is_empty() {
            return Err(QueryError::NoData);
        }

        let records = set.records();
        Ok(sample::sample_indices(rng, records.len(), n)
            .into_iter()
            .map(|idx| records[idx].clone())
            .collect())
    }

    /// Case-insensitive search capped at the default limit.
    pub fn search(&self, term: &str) -> Result<Vec<Record>, QueryError> {
        self.search_with_limit(term, constants::DEFAULT_SEARCH_LIMIT)
    }

    /// Case-insensitive search returning at most `limit` matches in file order.
    ///
    /// An empty `Ok` means the term matched nothing.
    pub fn search_with_limit(&self, term: &str, limit: usize) -> Result<Vec<Record>, QueryError> {
        let set = self.snapshot().ok_or(QueryError::NotReady)?;
        if term.trim().is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let records = set.records();
        let matches: Vec<Record> = search::search_indices(records, term, limit)
            .into_iter()
            .map(|idx| records[idx].clone())
            .collect();

        tracing::debug!(matches = matches.len(), limit, "Search completed");
        Ok(matches)
    }
}
