//! Extraction pipeline for rendered front-page markup.
//!
//! The pipeline runs synchronously over an already rendered document:
//!
//! 1. **Locate**: find `main#main-content` and every card container inside
//!    its top-level sections ([`locator`])
//! 2. **Extract**: pull link, image, headline, description and tags from each
//!    card ([`fields`], using [`image`] for `srcset` resolution)
//! 3. **Assemble**: drop cards with neither link nor headline and collect the
//!    rest in page order ([`assemble`])
//!
//! Node selection goes through the [`roles`] vocabulary. The static headline
//! path lives in [`headlines`] and shares only that vocabulary.

pub mod assemble;
pub mod fields;
pub mod headlines;
pub mod image;
pub mod locator;
pub mod roles;

use crate::error::Result;
use crate::models::ArticleRecord;
use assemble::RecordAssembler;
use scraper::Html;
use tracing::{debug, info, instrument};

/// Extract article records from rendered markup.
///
/// Relative links are made absolute against `origin`. Fails only when the
/// main content region is missing.
#[instrument(level = "info", skip_all, fields(bytes = html.len()))]
pub fn extract_articles(html: &str, origin: &str) -> Result<Box<[ArticleRecord]>> {
    let document = Html::parse_document(html);
    let main = locator::main_content(&document)?;

    let cards = locator::locate_cards(main);
    info!(count = cards.len(), "Located candidate cards");

    let mut assembler = RecordAssembler::new();
    for (index, card) in cards.into_iter().enumerate() {
        let card_fields = fields::extract_card(card, origin);
        if !assembler.push(card_fields) {
            debug!(index, "Discarding card with no link or headline");
        }
    }

    let discarded = assembler.discarded();
    let records = assembler.finish();
    info!(kept = records.len(), discarded, "Assembled article records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    const ORIGIN: &str = "https://www.bbc.com";

    #[test]
    fn test_full_and_headline_only_cards() {
        let html = r#"<!DOCTYPE html><html><body><main id="main-content">
          <section>
            <div data-testid="dundee-card">
              <a data-testid="internal-link" href="/news/articles/full">
                <img alt="A river at dawn"
                     src="https://ichef.bbci.co.uk/news/240/river.jpg"
                     srcset="https://ichef.bbci.co.uk/news/480/river.jpg 480w, https://ichef.bbci.co.uk/news/1024/river.jpg 1024w, https://ichef.bbci.co.uk/news/240/river.jpg 240w">
                <h2 data-testid="card-headline">Floods recede</h2>
                <p data-testid="card-description">Residents return home.</p>
              </a>
              <span data-testid="card-metadata-tag">Wales</span>
              <span data-testid="card-metadata-tag">Weather</span>
            </div>
            <div data-testid="edinburgh-card">
              <h3 data-testid="card-headline">Just a headline</h3>
            </div>
          </section>
        </main></body></html>"#;

        let records = extract_articles(html, ORIGIN).unwrap();
        assert_eq!(records.len(), 2);

        let full = &records[0];
        assert_eq!(full.url, "https://www.bbc.com/news/articles/full");
        assert_eq!(
            full.image_url,
            "https://ichef.bbci.co.uk/news/1024/river.jpg"
        );
        assert_eq!(full.image_description, "A river at dawn");
        assert_eq!(full.headline, "Floods recede");
        assert_eq!(full.description, "Residents return home.");
        assert_eq!(full.tags, vec!["Wales", "Weather"]);

        let bare = &records[1];
        assert_eq!(bare.headline, "Just a headline");
        assert_eq!(bare.url, "");
        assert_eq!(bare.image_url, "");
        assert_eq!(bare.image_description, "");
        assert_eq!(bare.description, "");
        assert!(bare.tags.is_empty());
    }

    #[test]
    fn test_empty_cards_are_dropped() {
        let html = r#"<html><body><main id="main-content"><section>
            <div data-testid="promo-content"><p data-testid="card-description">no anchor</p></div>
            <div data-testid="x-card"><a data-testid="internal-link" href="https://www.bbc.com/sport">Sport</a></div>
        </section></main></body></html>"#;

        let records = extract_articles(html, ORIGIN).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "https://www.bbc.com/sport");
        assert_eq!(records[0].headline, "");
    }

    #[test]
    fn test_placeholder_image_clears_description() {
        let html = r#"<html><body><main id="main-content"><section>
            <div data-testid="x-card">
              <a data-testid="internal-link" href="/news/p">
                <img alt="Placeholder" srcset="https://www.bbc.com/bbcx/grey-placeholder.png 240w">
              </a>
              <h2 data-testid="card-headline">Lazy image</h2>
            </div>
        </section></main></body></html>"#;

        let records = extract_articles(html, ORIGIN).unwrap();
        assert_eq!(records[0].image_url, "");
        assert_eq!(records[0].image_description, "");
        assert_eq!(records[0].url, "https://www.bbc.com/news/p");
    }

    #[test]
    fn test_sourceless_image_keeps_description() {
        let html = r#"<html><body><main id="main-content"><section>
            <div data-testid="x-card">
              <a data-testid="internal-link" href="/news/c"><img alt="Caption text"></a>
            </div>
        </section></main></body></html>"#;

        let records = extract_articles(html, ORIGIN).unwrap();
        assert_eq!(records[0].image_url, "");
        assert_eq!(records[0].image_description, "Caption text");
    }

    #[test]
    fn test_missing_main_content_aborts() {
        let result = extract_articles("<html><body><section></section></body></html>", ORIGIN);
        assert!(matches!(result, Err(ScrapeError::MainContentNotFound)));
    }

    #[test]
    fn test_no_sections_yields_no_records() {
        let html = r#"<html><body><main id="main-content">
            <div data-testid="x-card"><h2 data-testid="card-headline">Outside any section</h2></div>
        </main></body></html>"#;
        assert!(extract_articles(html, ORIGIN).unwrap().is_empty());
    }
}
