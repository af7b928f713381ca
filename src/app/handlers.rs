// Phonebook - app/handlers.rs
//
// Query handlers: turn a text query into a text reply by composing the
// record store with the table formatter.
//
// Handlers never fail. Every condition, including an unreadable export,
// becomes a reply string and the store stays ready for the next query.

use crate::app::store::RecordStore;
use crate::core::format::{render_table, TableLayout};
use crate::util::constants;
use crate::util::error::QueryError;
use std::sync::Arc;

/// Limits and layout used when answering queries.
#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub sample_size: usize,
    pub search_limit: usize,
    pub layout: TableLayout,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            sample_size: constants::DEFAULT_SAMPLE_SIZE,
            search_limit: constants::DEFAULT_SEARCH_LIMIT,
            layout: TableLayout::default(),
        }
    }
}

/// The sample, search, and help handlers over a shared store.
#[derive(Debug, Clone)]
pub struct QueryHandlers {
    store: Arc<RecordStore>,
    settings: QuerySettings,
}

impl QueryHandlers {
    pub fn new(store: Arc<RecordStore>, settings: QuerySettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Reply to `/start`: load on first use, then show a random sample.
    pub fn sample_query(&self) -> String {
        if !self.store.is_loaded() && self.store.load().is_err() {
            return constants::MSG_LOAD_FAILED.to_string();
        }

        match self.store.sample(self.settings.sample_size) {
            Ok(records) if !records.is_empty() => {
                render_table(constants::SAMPLE_TITLE, &records, &self.settings.layout)
            }
            Ok(_) | Err(QueryError::NoData) => constants::MSG_NO_DATA.to_string(),
            // Only reachable if a load succeeded and then vanished, which the
            // store never allows; answer as if loading failed.
            Err(QueryError::NotReady) | Err(QueryError::EmptyQuery) => {
                constants::MSG_LOAD_FAILED.to_string()
            }
        }
    }

    /// Reply to `/search <term>`. Does not load; `/start` must come first.
    ///
    /// `raw` may be the whole message; every `/search` token in it is removed
    /// before the remainder is trimmed into the term.
    pub fn search_query(&self, raw: &str) -> String {
        let term = search_term(raw);

        match self.store.search_with_limit(&term, self.settings.search_limit) {
            Err(QueryError::NotReady) => constants::MSG_NOT_READY.to_string(),
            Err(QueryError::EmptyQuery) => constants::MSG_EMPTY_QUERY.to_string(),
            Err(QueryError::NoData) => not_found_message(&term),
            Ok(records) if records.is_empty() => not_found_message(&term),
            Ok(records) => render_table(&search_title(&term), &records, &self.settings.layout),
        }
    }

    /// Reply to anything that is not a recognised command.
    pub fn help_query(&self) -> String {
        help_message()
    }
}

/// Usage text listing the available commands.
pub fn help_message() -> String {
    constants::MSG_HELP.to_string()
}

/// Strip every `/search` token from `raw` and trim what is left.
fn search_term(raw: &str) -> String {
    raw.replace(constants::SEARCH_COMMAND, "").trim().to_string()
}

fn not_found_message(term: &str) -> String {
    format!("🔍 No results found for '{term}'")
}

fn search_title(term: &str) -> String {
    format!("Search results for '{term}'")
}
