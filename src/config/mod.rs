//! Configuration management for shopscout.
//!
//! Configuration is read from `~/.config/shopscout/config.toml` at startup,
//! or from an explicit path given on the command line. If the default file
//! doesn't exist, a default configuration with comments is created.

use crate::scraper::ScraperConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
    pub backend: BackendConfig,
}

/// Where the results file is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the results document, relative to the working directory (default: results.json)
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("results.json"),
        }
    }
}

/// Optional submission of results to a backend service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Post results after saving them (default: false)
    pub submit_to_backend: bool,

    /// Backend origin; the route is appended verbatim (default: http://localhost:5000)
    pub base_url: String,

    /// Route used when none is given on the command line
    pub route: String,

    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            submit_to_backend: false,
            base_url: "http://localhost:5000".to_string(),
            route: String::new(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_create(&Self::default_config_path()?)
    }

    /// Load configuration from `path`, writing the commented default there first if absent.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/shopscout/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("shopscout").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> &'static str {
        r##"# shopscout configuration

[scraper]
# Run browser in headless mode (no visible window)
headless = true

# Timeout for loading the site's start page, in seconds
navigation_timeout_secs = 1200

# How long to wait for the search field and button to appear, in seconds
selector_timeout_secs = 30

# Wait after submitting a search for result cards to render (milliseconds)
wait_after_search_ms = 1000

# Maximum concurrent extractions; 0 runs one per result element
max_concurrency = 0

# What to do when extracting one result fails:
# "all_or_nothing" aborts the run, "isolate" skips that result
failure_policy = "all_or_nothing"

[output]
# Results document, overwritten on every run
path = "results.json"

[backend]
# Post results to the backend after saving them
submit_to_backend = false
base_url = "http://localhost:5000"
route = ""
timeout_secs = 10
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
