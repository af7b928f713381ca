// Phonebook - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::format::TableLayout;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Phonebook configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Full path of config.toml inside the platform config directory
    /// (e.g. ~/.config/phonebook/ or %APPDATA%\Phonebook\).
    pub config_file: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Runs before logging is initialised, so problems are pushed onto
    /// `warnings` instead of logged. Falls back to the current directory if
    /// platform dirs cannot be determined.
    pub fn resolve(warnings: &mut Vec<ConfigError>) -> Self {
        let config_dir = match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
            None => {
                let fallback = PathBuf::from(".");
                warnings.push(ConfigError::NoPlatformDirs {
                    fallback: fallback.clone(),
                });
                fallback
            }
        };

        Self {
            config_file: config_dir.join(constants::CONFIG_FILE_NAME),
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[data]` section.
    pub data: DataSection,
    /// `[query]` section.
    pub query: QuerySection,
    /// `[display]` section.
    pub display: DisplaySection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[data]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Path of the contact export.
    pub file: Option<String>,
}

/// `[query]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct QuerySection {
    /// Records returned by /start.
    pub sample_size: Option<usize>,
    /// Maximum matches returned by /search.
    pub search_limit: Option<usize>,
}

/// `[display]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Minimum phone column width.
    pub phone_width: Option<usize>,
    /// Divider line length.
    pub divider_width: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Contact export to load.
    pub data_file: PathBuf,
    /// Records returned by the sample command.
    pub sample_size: usize,
    /// Maximum matches returned by a search.
    pub search_limit: usize,
    /// Table rendering widths.
    pub layout: TableLayout,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(constants::DEFAULT_DATA_FILE),
            sample_size: constants::DEFAULT_SAMPLE_SIZE,
            search_limit: constants::DEFAULT_SEARCH_LIMIT,
            layout: TableLayout::default(),
            log_level: None,
        }
    }
}

/// Check `value` against an inclusive range, recording a warning if it is out.
fn validated_usize(
    field: &str,
    value: usize,
    min: usize,
    max: usize,
    warnings: &mut Vec<ConfigError>,
) -> Option<usize> {
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        warnings.push(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            expected: format!("{min}-{max}"),
        });
        None
    }
}

/// Load and validate a config file.
///
/// Called before logging is initialised, so it does not log; every problem
/// is returned alongside the config.
/// Returns `AppConfig` with validated values and a list of non-fatal problems.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults plus the error.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => {
            let config = validate(raw, &mut warnings);
            (config, warnings)
        }
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            });
            (AppConfig::default(), warnings)
        }
    }
}

/// Turn a parsed config into validated settings, accumulating all problems.
pub fn validate(raw: RawConfig, warnings: &mut Vec<ConfigError>) -> AppConfig {
    let mut config = AppConfig::default();

    if let Some(file) = raw.data.file {
        if !file.trim().is_empty() {
            config.data_file = PathBuf::from(file);
        }
    }

    if let Some(size) = raw.query.sample_size.and_then(|v| {
        validated_usize(
            "query.sample_size",
            v,
            constants::MIN_SAMPLE_SIZE,
            constants::MAX_SAMPLE_SIZE,
            warnings,
        )
    }) {
        config.sample_size = size;
    }

    if let Some(limit) = raw.query.search_limit.and_then(|v| {
        validated_usize(
            "query.search_limit",
            v,
            constants::MIN_SEARCH_LIMIT,
            constants::MAX_SEARCH_LIMIT,
            warnings,
        )
    }) {
        config.search_limit = limit;
    }

    if let Some(width) = raw.display.phone_width.and_then(|v| {
        validated_usize(
            "display.phone_width",
            v,
            constants::MIN_PHONE_WIDTH,
            constants::MAX_PHONE_WIDTH,
            warnings,
        )
    }) {
        config.layout.phone_width = width;
    }

    if let Some(width) = raw.display.divider_width.and_then(|v| {
        validated_usize(
            "display.divider_width",
            v,
            constants::MIN_DIVIDER_WIDTH,
            constants::MAX_DIVIDER_WIDTH,
            warnings,
        )
    }) {
        config.layout.divider_width = width;
    }

    if let Some(level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level,
                expected: valid.join(", "),
            });
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("absent.toml"));
        assert!(warnings.is_empty());
        assert_eq!(config.sample_size, constants::DEFAULT_SAMPLE_SIZE);
        assert_eq!(config.search_limit, constants::DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.data_file, PathBuf::from(constants::DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_valid_values_applied() {
        let (_dir, path) = write_config(
            r#"
[data]
file = "/srv/export/output_clean.txt"

[query]
sample_size = 3
search_limit = 25

[display]
phone_width = 20
divider_width = 30

[logging]
level = "debug"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.data_file, PathBuf::from("/srv/export/output_clean.txt"));
        assert_eq!(config.sample_size, 3);
        assert_eq!(config.search_limit, 25);
        assert_eq!(config.layout.phone_width, 20);
        assert_eq!(config.layout.divider_width, 30);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let (_dir, path) = write_config(
            r#"
[query]
sample_size = 0
search_limit = 1000

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 3);
        assert_eq!(config.sample_size, constants::DEFAULT_SAMPLE_SIZE);
        assert_eq!(config.search_limit, constants::DEFAULT_SEARCH_LIMIT);
        assert!(config.log_level.is_none());
        assert!(warnings
            .iter()
            .all(|w| matches!(w, ConfigError::ValueOutOfRange { .. })));
    }

    #[test]
    fn test_unparseable_file_gives_defaults_and_error() {
        let (_dir, path) = write_config("[query\nsample_size = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], ConfigError::TomlParse { .. }));
        assert_eq!(config.sample_size, constants::DEFAULT_SAMPLE_SIZE);
    }

    #[test]
    fn test_zero_widths_fall_back() {
        let (_dir, path) = write_config("[display]\nphone_width = 0\ndivider_width = 0\n");
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 2);
        assert_eq!(config.layout.phone_width, constants::DEFAULT_PHONE_WIDTH);
        assert_eq!(config.layout.divider_width, constants::DEFAULT_DIVIDER_WIDTH);
        assert!(warnings[0].to_string().contains(&format!(
            "{}-{}",
            constants::MIN_PHONE_WIDTH,
            constants::MAX_PHONE_WIDTH
        )));
    }

    #[test]
    fn test_resolve_reports_problems_as_warnings() {
        let mut warnings = Vec::new();
        let paths = PlatformPaths::resolve(&mut warnings);
        assert_eq!(
            paths.config_file.file_name().and_then(|n| n.to_str()),
            Some(constants::CONFIG_FILE_NAME)
        );
        // Only the missing-platform-dirs case produces a warning, never a log.
        assert!(warnings.len() <= 1);
        assert!(warnings
            .iter()
            .all(|w| matches!(w, ConfigError::NoPlatformDirs { .. })));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (_dir, path) = write_config("[future]\nflag = true\n");
        let (_config, warnings) = load_config(&path);
        assert!(warnings.is_empty());
    }
}
