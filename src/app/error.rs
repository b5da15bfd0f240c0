use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Unsupported site: {0}")]
    UnsupportedSite(String),

    #[error("Selector '{selector}' not found on {url} within {waited_secs}s")]
    SelectorNotFound {
        selector: String,
        url: String,
        waited_secs: u64,
    },

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
