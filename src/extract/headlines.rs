//! Flat headline extraction from a statically fetched page.

use super::roles::{self, Role};
use crate::models::Headlines;
use scraper::Html;

/// Raw text of every promo heading, in document order.
///
/// Text is kept as-is, surrounding whitespace included.
pub fn extract_headlines(html: &str) -> Headlines {
    let document = Html::parse_document(html);
    let headlines = roles::find_all(document.root_element(), Role::PromoHeading)
        .map(|el| el.text().collect::<String>())
        .collect();
    Headlines { headlines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headlines_in_order() {
        let html = r#"<html><body>
            <h3 class="gs-c-promo-heading__title gel-paragon-bold">First story</h3>
            <div><h2 class="gs-c-promo-heading__title">Second <span>story</span></h2></div>
            <h3 class="gs-c-promo-heading__title">First story</h3>
            <h3 class="gs-c-promo-summary">Not a heading</h3>
        </body></html>"#;

        let headlines = extract_headlines(html);
        assert_eq!(
            headlines.headlines,
            vec!["First story", "Second story", "First story"]
        );
    }

    #[test]
    fn test_extract_headlines_keeps_raw_text() {
        let html = r#"<h3 class="gs-c-promo-heading__title"> padded </h3>"#;
        assert_eq!(extract_headlines(html).headlines, vec![" padded "]);
    }

    #[test]
    fn test_extract_headlines_empty_page() {
        assert!(extract_headlines("<html></html>").headlines.is_empty());
    }
}
