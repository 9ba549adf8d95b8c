//! Run configuration.
//!
//! Defaults target the BBC News front page. Any subset of fields may be
//! overridden from a YAML file:
//!
//! ```yaml
//! target_url: https://www.bbc.com/news
//! site_origin: https://www.bbc.com
//! articles_output: output/news_scrapped.json
//! scroll_delay_secs: 3
//! max_scroll_rounds: 30
//! ```
//!
//! CLI flags are applied on top of the file by `main`.

use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

/// Settings for one scrape run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Page to scrape.
    pub target_url: String,
    /// Origin prepended to path-only card links.
    pub site_origin: String,
    /// Destination of the article records.
    pub articles_output: PathBuf,
    /// Destination of the static headline list.
    pub headlines_output: PathBuf,
    /// Pause after navigation before the first height measurement.
    pub initial_wait_secs: u64,
    /// Pause after each scroll before measuring again.
    pub scroll_delay_secs: u64,
    /// Upper bound on scroll rounds before giving up on stabilization.
    pub max_scroll_rounds: u32,
    /// Upper bound on the whole browser render.
    pub render_timeout_secs: u64,
    /// Timeout for the static HTTP fetch.
    pub request_timeout_secs: u64,
    /// User agent sent by the static fetcher.
    pub user_agent: String,
    /// Explicit Chromium binary; auto-detected when unset.
    pub chrome_executable: Option<PathBuf>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            target_url: "https://www.bbc.com/news".to_string(),
            site_origin: "https://www.bbc.com".to_string(),
            articles_output: PathBuf::from("output/news_scrapped.json"),
            headlines_output: PathBuf::from("output/bad_scrapped.json"),
            initial_wait_secs: 5,
            scroll_delay_secs: 3,
            max_scroll_rounds: 30,
            render_timeout_secs: 180,
            request_timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            chrome_executable: None,
        }
    }
}

impl ScrapeConfig {
    pub fn initial_wait(&self) -> Duration {
        Duration::from_secs(self.initial_wait_secs)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_secs(self.scroll_delay_secs)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check that the URLs parse and the bounds are usable.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.target_url)
            .map_err(|e| ScrapeError::Config(format!("target_url {:?}: {e}", self.target_url)))?;
        let origin = Url::parse(&self.site_origin)
            .map_err(|e| ScrapeError::Config(format!("site_origin {:?}: {e}", self.site_origin)))?;
        if origin.path() != "/" || origin.query().is_some() {
            return Err(ScrapeError::Config(format!(
                "site_origin {:?} must not carry a path or query",
                self.site_origin
            )));
        }
        if self.max_scroll_rounds == 0 {
            return Err(ScrapeError::Config(
                "max_scroll_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a YAML configuration document.
pub fn parse_config(yaml: &str) -> Result<ScrapeConfig> {
    let config: ScrapeConfig =
        serde_yaml::from_str(yaml).map_err(|e| ScrapeError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from `path`, or defaults when no path is given.
#[instrument(level = "info")]
pub fn load_config(path: Option<&Path>) -> Result<ScrapeConfig> {
    let Some(path) = path else {
        return Ok(ScrapeConfig::default());
    };
    let yaml = std::fs::read_to_string(path)
        .map_err(|e| ScrapeError::Config(format!("{}: {e}", path.display())))?;
    let config = parse_config(&yaml)?;
    info!(path = %path.display(), "Loaded configuration");
    Ok(config)
}
