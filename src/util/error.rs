// Phonebook - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Phonebook operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum PhonebookError {
    /// The contact export could not be loaded.
    Load(LoadError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for PhonebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for PhonebookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors that make a whole load attempt fail.
///
/// Malformed lines are never reported here; they are dropped by the parser.
#[derive(Debug)]
pub enum LoadError {
    /// The export could not be opened or read.
    Io { path: PathBuf, source: io::Error },

    /// The export is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read contact export '{}': {source}", path.display())
            }
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidEncoding { source, .. } => Some(source),
        }
    }
}

impl From<LoadError> for PhonebookError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Query conditions
// ---------------------------------------------------------------------------

/// Recoverable conditions reported by the record store.
///
/// None of these are faults; each maps to an advisory reply. A search with
/// no matches is an empty `Ok` result, not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// No record set has been loaded yet.
    NotReady,

    /// A record set is loaded but holds no records.
    NoData,

    /// The search term was empty or whitespace only.
    EmptyQuery,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => f.write_str("contact data has not been loaded"),
            Self::NoData => f.write_str("contact data is empty"),
            Self::EmptyQuery => f.write_str("search term is empty"),
        }
    }
}

impl std::error::Error for QueryError {}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },

    /// The platform config directory could not be determined.
    NoPlatformDirs { fallback: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
            Self::NoPlatformDirs { fallback } => write!(
                f,
                "Could not determine platform directories, using '{}'",
                fallback.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for PhonebookError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_load_error_keeps_source_chain() {
        let err = LoadError::Io {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.txt"));

        let top: PhonebookError = err.into();
        let inner = top.source().unwrap();
        assert!(inner.source().is_some());
        assert!(top.to_string().starts_with("Load error:"));
    }

    #[test]
    fn test_config_out_of_range_display() {
        let err = ConfigError::ValueOutOfRange {
            field: "query.sample_size".to_string(),
            value: "0".to_string(),
            expected: "1-50".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("query.sample_size"));
        assert!(msg.contains("1-50"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_query_error_is_copy_and_comparable() {
        let a = QueryError::EmptyQuery;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(QueryError::NotReady, QueryError::NoData);
    }
}
