// Phonebook - util/constants.rs
//
// Single source of truth for all named constants, limits, defaults,
// and the fixed response texts returned to the messaging host.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Phonebook";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Phonebook";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Record parsing
// =============================================================================

/// Leading characters that mark a header or divider row in the export.
///
/// `=` is the row delimiter; the two emoji are the phone-column and
/// name-column header icons.
pub const HEADER_MARKERS: &[char] = &['=', '📱', '🧑'];

/// Pattern for a data row: a phone-like run, one or more tabs, then the name.
///
/// Applied to lines that have already been trimmed.
pub const RECORD_LINE_PATTERN: &str = r"^([0-9+\- ]+)\t+(.+)$";

/// Default export file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "contacts.txt";

// =============================================================================
// Query limits
// =============================================================================

/// Number of records returned by the sample command.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Minimum user-configurable sample size.
pub const MIN_SAMPLE_SIZE: usize = 1;

/// Maximum user-configurable sample size.
pub const MAX_SAMPLE_SIZE: usize = 50;

/// Maximum matches collected by a single search. The scan stops once reached.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Minimum user-configurable search limit.
pub const MIN_SEARCH_LIMIT: usize = 1;

/// Maximum user-configurable search limit.
pub const MAX_SEARCH_LIMIT: usize = 100;

// =============================================================================
// Display
// =============================================================================

/// Minimum width the phone column is left-justified to.
pub const DEFAULT_PHONE_WIDTH: usize = 15;

/// Lower bound on the configurable phone column width.
pub const MIN_PHONE_WIDTH: usize = 1;

/// Upper bound on the configurable phone column width.
pub const MAX_PHONE_WIDTH: usize = 64;

/// Number of `=` characters in the divider line under the header.
pub const DEFAULT_DIVIDER_WIDTH: usize = 40;

/// Lower bound on the configurable divider width.
pub const MIN_DIVIDER_WIDTH: usize = 1;

/// Upper bound on the configurable divider width.
pub const MAX_DIVIDER_WIDTH: usize = 200;

/// Character repeated to draw the divider line.
pub const DIVIDER_CHAR: char = '=';

/// Prefix of the title line.
pub const TITLE_ICON: &str = "📋";

/// Two-column header line.
pub const TABLE_HEADER: &str = "📱 Phone\t\t🧑 Name";

// =============================================================================
// Commands
// =============================================================================

/// Exact text of the sample command.
pub const START_COMMAND: &str = "/start";

/// Prefix of the search command; the remainder is the search term.
pub const SEARCH_COMMAND: &str = "/search";

// =============================================================================
// Response text
// =============================================================================

/// Title for a sample reply.
pub const SAMPLE_TITLE: &str = "Sample of contacts";

/// Reply when the export could not be read or decoded.
pub const MSG_LOAD_FAILED: &str = "❌ Could not load the contact data!";

/// Reply when a load succeeded but produced no records.
pub const MSG_NO_DATA: &str = "⚠️ No contact data found!";

/// Reply when a search arrives before any successful load.
pub const MSG_NOT_READY: &str = "Please send /start first so the contact data is loaded";

/// Reply when `/search` carries no term.
pub const MSG_EMPTY_QUERY: &str = "⚠️ Please type a search term after /search";

/// Usage text returned for anything that is not a recognised command.
pub const MSG_HELP: &str = "🤖 Phonebook bot\n\n\
                            Available commands:\n\
                            /start - show a sample of contacts\n\
                            /search [term] - search names and numbers";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of an inbound message included in debug output.
/// Prevents long pasted payloads from flooding the log.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
