//! JSON output for article records and headline lists.
//!
//! Files are pretty-printed with four-space indentation. Non-ASCII text is
//! written as UTF-8 rather than escaped.

use crate::error::Result;
use crate::models::{ArticleRecord, Headlines};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `value` with four-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `value` to `path`, creating the parent directory if needed.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = to_pretty_json(value)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!("Wrote JSON file");
    Ok(())
}

/// Write the article records as a JSON array.
pub async fn write_articles(records: &[ArticleRecord], path: &Path) -> Result<()> {
    write_json(records, path).await
}

/// Write the headline list as `{"headlines": [...]}`.
pub async fn write_headlines(headlines: &Headlines, path: &Path) -> Result<()> {
    write_json(headlines, path).await
}
