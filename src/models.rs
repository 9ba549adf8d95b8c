//! Data models for extracted front-page content.
//!
//! This module defines the records that leave the extraction pipeline:
//! - [`ArticleRecord`]: One article card, serialized to the articles JSON file
//! - [`Headlines`]: Flat headline list produced by the static path
//! - [`ImageCandidate`]: One parsed entry of a responsive image descriptor set
//!
//! Optional fields are carried as empty strings in [`ArticleRecord`] so the
//! JSON shape stays fixed: every key is always present.

use serde::{Deserialize, Serialize};

/// A single article card pulled from the front page.
///
/// Field order matches the key order of the JSON output.
///
/// # Invariant
///
/// Records produced by the assembler always have a non-empty `url` or a
/// non-empty `headline`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Absolute article URL, or empty when the card has no internal link.
    pub url: String,
    /// Highest resolution image URL, or empty.
    pub image_url: String,
    /// The image `alt` text, or empty.
    pub image_description: String,
    /// Card headline text.
    pub headline: String,
    /// Card summary text.
    pub description: String,
    /// Metadata tags in document order. Duplicates are kept.
    pub tags: Vec<String>,
}

impl ArticleRecord {
    /// Whether this record carries enough to be worth keeping.
    pub fn is_retained(&self) -> bool {
        !self.url.is_empty() || !self.headline.is_empty()
    }
}

/// Output of the static headline path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Headlines {
    pub headlines: Vec<String>,
}

/// One `URL width` entry parsed from a `srcset` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub url: String,
    pub width: u32,
}
