//! Command-line interface definitions.
//!
//! Every option is optional: with no arguments the tool renders the default
//! front page and writes `output/news_scrapped.json`. Options override the
//! configuration file, which overrides the built-in defaults.

use crate::config::ScrapeConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Rendered article cards (default command)
/// frontpage_scrape
///
/// # Static headline list to a custom file
/// frontpage_scrape headlines -o /tmp/headlines.json
///
/// # Custom config and Chromium binary
/// frontpage_scrape -c scrape.yaml --chrome /usr/bin/chromium articles
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "FRONTPAGE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Page to scrape instead of the configured target
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Output file for the selected command
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Chromium executable used for rendering
    #[arg(long, env = "CHROME_PATH", global = true)]
    pub chrome: Option<PathBuf>,
}

/// What to extract.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Render the page and extract article cards
    #[default]
    Articles,
    /// Fetch the page statically and list promo headlines
    Headlines,
}

impl Cli {
    pub fn selected(&self) -> Command {
        self.command.unwrap_or_default()
    }

    /// Apply command-line overrides to `config`.
    pub fn apply(&self, config: &mut ScrapeConfig) {
        if let Some(url) = &self.url {
            config.target_url = url.clone();
        }
        if let Some(chrome) = &self.chrome {
            config.chrome_executable = Some(chrome.clone());
        }
        if let Some(output) = &self.output {
            match self.selected() {
                Command::Articles => config.articles_output = output.clone(),
                Command::Headlines => config.headlines_output = output.clone(),
            }
        }
    }
}
