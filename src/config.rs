//! Configuration file
//!
//! Optional TOML file with defaults for the command-line options. Looked up
//! at `--config <path>` or `<config dir>/word_finder/config.toml`; a missing
//! default file just means defaults.
//!
//! ```toml
//! dictionary = "/usr/share/dict/words"
//! locale = "ru"
//! collation = "locale"   # or "codepoint"
//!
//! [logging]
//! level = "debug"
//! dir = "/tmp/word_finder"
//! ```

use crate::core::CollationKind;
use crate::core::collation::DEFAULT_LOCALE;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word list used when none is configured
pub const DEFAULT_DICTIONARY: &str = "wordlist.txt";

const APP_DIR: &str = "word_finder";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings from the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word list file
    pub dictionary: PathBuf,
    /// BCP-47 tag for result ordering
    pub locale: String,
    pub collation: CollationKind,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            locale: DEFAULT_LOCALE.to_string(),
            collation: CollationKind::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set
    pub level: String,
    /// Directory for log files; no file logging when unset
    pub dir: Option<PathBuf>,
    /// Log file name prefix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            file_prefix: "word_finder.log".to_string(),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit path, or from the default location if present
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing or unreadable, or
    /// if any file found does not parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse one config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
