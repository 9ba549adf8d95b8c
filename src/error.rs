//! Error types for the scrape run.
//!
//! Only run-level failures live here. A missing field inside a card or a
//! malformed `srcset` entry is never an error: those degrade to empty values
//! where they happen.

use std::time::Duration;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that abort a scrape run.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network failure while fetching a page.
    #[error("Network error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Failed to fetch {url}, status code: {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The headless browser could not launch, navigate or evaluate a script.
    #[error("Render error: {0}")]
    Render(String),

    /// Rendering did not finish within the configured bound.
    #[error("Render timed out after {0:?}")]
    Timeout(Duration),

    /// The rendered document has no `main#main-content` region.
    #[error("Main content not found")]
    MainContentNotFound,

    /// The configuration file could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
