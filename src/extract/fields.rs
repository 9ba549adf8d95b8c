//! Per-card field extraction.
//!
//! Every field is looked up independently. A card missing its image, tags or
//! even its link still yields whatever else it has; absence is recorded as
//! `None` and only flattened to an empty string by the assembler.

use super::image;
use super::roles::{self, Role};
use scraper::ElementRef;
use tracing::debug;

/// Lead image of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    /// Empty when the `img` has neither a usable `srcset` nor a `src`.
    pub url: String,
    pub description: Option<String>,
}

/// Everything pulled out of one card container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub link: Option<String>,
    pub image: Option<CardImage>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Make a path-only link absolute against `origin`.
///
/// Only targets starting with `/` are rewritten; everything else is returned
/// unchanged.
pub fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

/// Resolve the image nested inside the card's link.
///
/// Returns `None` when there is no `img` or when it resolves to the
/// lazy-load placeholder. An `img` with no usable source still keeps its
/// `alt` text, with an empty URL.
fn link_image(anchor: ElementRef<'_>) -> Option<CardImage> {
    let img = roles::find_tag(anchor, "img")?;
    let attrs = img.value();
    let url = image::resolve(attrs.attr("srcset"), attrs.attr("src")).unwrap_or_default();

    if image::is_placeholder(&url) {
        debug!(%url, "Dropping placeholder image");
        return None;
    }

    Some(CardImage {
        url,
        description: attrs.attr("alt").map(str::to_string),
    })
}

fn text_of(card: ElementRef<'_>, role: Role) -> Option<String> {
    roles::find_first(card, role).map(roles::trimmed_text)
}

/// Extract all fields from one card container.
pub fn extract_card(card: ElementRef<'_>, origin: &str) -> CardFields {
    let anchor = roles::find_first(card, Role::InternalLink);

    let (link, image) = match anchor {
        Some(anchor) => {
            let href = anchor.value().attr("href").unwrap_or_default();
            (Some(absolutize(href, origin)), link_image(anchor))
        }
        None => (None, None),
    };

    let tags = roles::find_all(card, Role::Tag)
        .map(roles::trimmed_text)
        .collect();

    CardFields {
        link,
        image,
        headline: text_of(card, Role::Headline),
        description: text_of(card, Role::Description),
        tags,
    }
}
