//! Card discovery inside the rendered front page.

use super::roles::{self, Role};
use crate::error::{Result, ScrapeError};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static MAIN_CONTENT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("main#main-content").expect("valid main selector"));

/// The page's main content region.
pub fn main_content(document: &Html) -> Result<ElementRef<'_>> {
    document
        .select(&MAIN_CONTENT)
        .next()
        .ok_or(ScrapeError::MainContentNotFound)
}

fn is_section(element: &ElementRef<'_>) -> bool {
    element.value().name() == "section"
}

/// Sections of `main` that are not nested in another section.
pub fn top_level_sections<'a>(main: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    roles::descendants(main).filter(move |el| {
        is_section(el)
            && !el
                .ancestors()
                .take_while(|node| node.id() != main.id())
                .filter_map(ElementRef::wrap)
                .any(|a| is_section(&a))
    })
}

/// Candidate card containers in document order.
///
/// A card nested inside another card is reported separately.
pub fn locate_cards(main: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    top_level_sections(main)
        .flat_map(|section| roles::find_all(section, Role::Card))
        .collect()
}
