//! Responsive image resolution.
//!
//! Cards carry their lead image as a `srcset` descriptor list such as
//!
//! ```text
//! https://ichef.bbci.co.uk/240/a.jpg 240w, https://ichef.bbci.co.uk/800/a.jpg 800w
//! ```
//!
//! The resolver keeps the widest candidate. Ties go to the entry seen first
//! since the comparison is strict.

use crate::models::ImageCandidate;
use tracing::debug;

/// Substring marking a lazy-load stand-in rather than the real image.
pub const PLACEHOLDER_SENTINEL: &str = "grey-placeholder";

/// Parse one `URL width` descriptor entry.
///
/// The width is the first run of ASCII digits in the second token, so `800w`,
/// `800` and `x800w` all give 800. Returns `None` when the entry has fewer
/// than two tokens or the width token has no digits.
pub fn parse_candidate(entry: &str) -> Option<ImageCandidate> {
    let mut tokens = entry.split_whitespace();
    let url = tokens.next()?;
    let width_token = tokens.next()?;

    let digits: String = width_token
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let width = digits.parse::<u32>().ok()?;

    Some(ImageCandidate {
        url: url.to_string(),
        width,
    })
}

/// Pick the widest candidate from a descriptor set.
///
/// Malformed entries are skipped. Returns `None` when nothing parses.
pub fn widest_candidate(srcset: &str) -> Option<ImageCandidate> {
    let mut best: Option<ImageCandidate> = None;
    for entry in srcset.split(',') {
        let Some(candidate) = parse_candidate(entry) else {
            if !entry.trim().is_empty() {
                debug!(entry = entry.trim(), "Skipping malformed srcset entry");
            }
            continue;
        };
        match &best {
            Some(current) if candidate.width <= current.width => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Resolve the image URL for a card.
///
/// A non-empty `srcset` is preferred. When it is empty, absent or yields no
/// usable entry, `fallback` (the plain `src`) is used verbatim. Returns
/// `None` when neither produces a URL.
pub fn resolve(srcset: Option<&str>, fallback: Option<&str>) -> Option<String> {
    srcset
        .filter(|s| !s.trim().is_empty())
        .and_then(widest_candidate)
        .map(|c| c.url)
        .or_else(|| fallback.filter(|f| !f.is_empty()).map(str::to_string))
}

/// Whether `url` points at the lazy-load placeholder.
pub fn is_placeholder(url: &str) -> bool {
    url.contains(PLACEHOLDER_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidate() {
        assert_eq!(
            parse_candidate(" https://img/a.jpg 480w "),
            Some(ImageCandidate {
                url: "https://img/a.jpg".to_string(),
                width: 480
            })
        );
        assert_eq!(parse_candidate("https://img/a.jpg").map(|c| c.width), None);
        assert_eq!(parse_candidate("https://img/a.jpg 2x").map(|c| c.width), Some(2));
        assert_eq!(parse_candidate("https://img/a.jpg wide"), None);
        assert_eq!(parse_candidate(""), None);
    }

    #[test]
    fn test_widest_candidate_distinct_widths() {
        let srcset = "https://img/240.jpg 240w, https://img/976.jpg 976w, https://img/480.jpg 480w";
        assert_eq!(widest_candidate(srcset).unwrap().url, "https://img/976.jpg");
    }

    #[test]
    fn test_widest_candidate_first_wins_on_tie() {
        let srcset = "https://img/a.jpg 800w, https://img/b.jpg 800w, https://img/c.jpg 320w";
        assert_eq!(widest_candidate(srcset).unwrap().url, "https://img/a.jpg");
    }

    #[test]
    fn test_widest_candidate_skips_malformed_entries() {
        let srcset = "https://img/a.jpg 320w, https://img/bad.jpg huge, https://img/b.jpg 640w, ,";
        assert_eq!(widest_candidate(srcset).unwrap().url, "https://img/b.jpg");
    }

    #[test]
    fn test_widest_candidate_nothing_parses() {
        assert_eq!(widest_candidate("https://img/a.jpg, https://img/b.jpg big"), None);
        assert_eq!(widest_candidate(""), None);
    }

    #[test]
    fn test_resolve_prefers_srcset() {
        let resolved = resolve(
            Some("https://img/small.jpg 100w, https://img/big.jpg 1000w"),
            Some("https://img/src.jpg"),
        );
        assert_eq!(resolved.as_deref(), Some("https://img/big.jpg"));
    }

    #[test]
    fn test_resolve_falls_back_to_src() {
        assert_eq!(
            resolve(Some(""), Some("https://img/src.jpg")).as_deref(),
            Some("https://img/src.jpg")
        );
        assert_eq!(
            resolve(None, Some("https://img/src.jpg")).as_deref(),
            Some("https://img/src.jpg")
        );
        assert_eq!(
            resolve(Some("garbage"), Some("https://img/src.jpg")).as_deref(),
            Some("https://img/src.jpg")
        );
    }

    #[test]
    fn test_resolve_empty() {
        assert_eq!(resolve(None, None), None);
        assert_eq!(resolve(Some("garbage"), Some("")), None);
    }

    #[test]
    fn test_is_placeholder() {
        assert!(is_placeholder(
            "https://www.bbc.com/bbcx/grey-placeholder.png"
        ));
        assert!(!is_placeholder("https://ichef.bbci.co.uk/news/480/a.jpg"));
    }
}
