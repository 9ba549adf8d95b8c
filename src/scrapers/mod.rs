//! Page sources that turn a URL into markup.
//!
//! Two sources exist, matching the two commands:
//!
//! | Source | Module | Method | Used by |
//! |--------|--------|--------|---------|
//! | [`render::ChromiumRenderer`] | [`render`] | Headless Chromium with scroll-to-load | `articles` |
//! | [`fetch::StaticFetcher`] | [`fetch`] | Plain HTTP GET | `headlines` |
//!
//! Both implement [`PageSource`], so the extraction side only ever sees a
//! markup string. Neither source retries: a failed fetch or navigation ends
//! the run before anything is written.

pub mod fetch;
pub mod render;

use crate::error::Result;

/// Something that can produce the markup of a page.
pub trait PageSource {
    /// Fetch `url` and return its markup.
    async fn fetch_html(&self, url: &str) -> Result<String>;
}
