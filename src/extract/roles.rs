//! Attribute-based role vocabulary for front-page markup.
//!
//! Cards on the page are not identified by stable classes but by
//! `data-testid` values. Each [`Role`] pairs the element names it applies to
//! with a predicate on that attribute, so the rest of the pipeline asks
//! "find the first [`Role::Headline`] in this card" instead of matching
//! strings inline.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

/// Attribute carrying the role of a node.
pub const ROLE_ATTR: &str = "data-testid";

/// Class marking headline nodes on the static page.
pub const PROMO_HEADING_CLASS: &str = "gs-c-promo-heading__title";

/// Suffix vocabulary for card containers, matched anywhere in the attribute.
static CARD_ROLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-(?:card|article|content)").expect("valid card role pattern"));

/// A kind of node the extractor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Article container: `div`/`article` whose role ends in a card suffix.
    Card,
    /// Link to the article, with a non-empty `href`.
    InternalLink,
    /// Card headline heading.
    Headline,
    /// Card summary paragraph.
    Description,
    /// One metadata tag (section name, topic, ...).
    Tag,
    /// Headline on the static page, selected by class rather than role.
    PromoHeading,
}

impl Role {
    /// Element names this role may appear on.
    pub fn elements(self) -> &'static [&'static str] {
        match self {
            Role::Card => &["div", "article"],
            Role::InternalLink => &["a"],
            Role::Headline => &["h1", "h2", "h3"],
            Role::Description => &["p"],
            Role::Tag => &["span"],
            Role::PromoHeading => &["h2", "h3"],
        }
    }

    /// Whether `element` plays this role.
    pub fn matches(self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        if !self.elements().contains(&value.name()) {
            return false;
        }
        let role = value.attr(ROLE_ATTR);
        match self {
            Role::Card => role.is_some_and(|r| CARD_ROLE.is_match(r)),
            Role::InternalLink => {
                role == Some("internal-link") && value.attr("href").is_some_and(|h| !h.is_empty())
            }
            Role::Headline => role == Some("card-headline"),
            Role::Description => role == Some("card-description"),
            Role::Tag => role == Some("card-metadata-tag"),
            Role::PromoHeading => value.classes().any(|c| c == PROMO_HEADING_CLASS),
        }
    }
}

/// Descendant elements of `scope` in document order, excluding `scope` itself.
pub fn descendants<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Every descendant of `scope` playing `role`, in document order.
pub fn find_all<'a>(scope: ElementRef<'a>, role: Role) -> impl Iterator<Item = ElementRef<'a>> {
    descendants(scope).filter(move |el| role.matches(el))
}

/// First descendant of `scope` playing `role`.
pub fn find_first<'a>(scope: ElementRef<'a>, role: Role) -> Option<ElementRef<'a>> {
    find_all(scope, role).next()
}

/// First descendant element with the given tag name.
pub fn find_tag<'a>(scope: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    descendants(scope).find(|el| el.value().name() == name)
}

/// Concatenated text of `element`, trimmed.
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
