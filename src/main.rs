//! # Frontpage Scrape
//!
//! Extracts structured article cards from a news front page after its lazily
//! loaded content has rendered, and writes them out as JSON.
//!
//! ## Usage
//!
//! ```sh
//! frontpage_scrape              # rendered article cards
//! frontpage_scrape headlines    # static headline list
//! ```
//!
//! ## Architecture
//!
//! 1. **Rendering**: Headless Chromium loads the page and scrolls until the
//!    document height settles (bounded)
//! 2. **Extraction**: Cards are located, their fields pulled out and images
//!    resolved to the widest `srcset` candidate
//! 3. **Output**: Records are written to a JSON file
//!
//! A fetch, navigation or structural failure ends the run before anything is
//! written. Missing fields inside a card never do.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod extract;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::{Cli, Command};
use config::{ScrapeConfig, load_config};
use error::ScrapeError;
use outputs::json;
use scrapers::PageSource;
use scrapers::fetch::StaticFetcher;
use scrapers::render::ChromiumRenderer;
use utils::{ensure_writable_dir, truncate_for_log};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("frontpage_scrape starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let command = args.selected();
    let result = match command {
        Command::Articles => scrape_articles(&config).await,
        Command::Headlines => scrape_headlines(&config).await,
    };

    if let Err(e) = result {
        error!(?command, error = %e, "Scrape failed; no output written");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

/// Render the front page, extract article cards and write them out.
#[instrument(level = "info", skip_all, fields(url = %config.target_url))]
async fn scrape_articles(config: &ScrapeConfig) -> Result<(), ScrapeError> {
    let output = &config.articles_output;
    ensure_writable_dir(output).await?;

    let renderer = ChromiumRenderer::new(config);
    let html = renderer.fetch_html(&config.target_url).await?;

    let count = extract_and_write(&html, &config.site_origin, output).await?;
    info!(count, path = %output.display(), "Scraped articles and saved");
    Ok(())
}

/// Extract article records from `html` and write them to `output`.
///
/// Nothing is written when extraction fails.
async fn extract_and_write(html: &str, origin: &str, output: &Path) -> Result<usize, ScrapeError> {
    let records = match extract::extract_articles(html, origin) {
        Ok(records) => records,
        Err(e) => {
            debug!(preview = %truncate_for_log(html, 500), "Rendered markup");
            return Err(e);
        }
    };

    json::write_articles(&records, output).await?;
    Ok(records.len())
}

/// Fetch the page without rendering and write its promo headlines.
#[instrument(level = "info", skip_all, fields(url = %config.target_url))]
async fn scrape_headlines(config: &ScrapeConfig) -> Result<(), ScrapeError> {
    let output = &config.headlines_output;
    ensure_writable_dir(output).await?;

    let fetcher = StaticFetcher::new(config)?;
    let html = fetcher.fetch_html(&config.target_url).await?;

    let headlines = extract::headlines::extract_headlines(&html);
    json::write_headlines(&headlines, output).await?;
    info!(
        count = headlines.headlines.len(),
        path = %output.display(),
        "Scraped headlines and saved"
    );
    Ok(())
}
