//! Element kind detection
//!
//! Keywords are checked in list order and the first one found as a substring
//! decides the kind. The order is part of the contract: "text board" is Text
//! because `text` precedes `board`.

use super::entities::ElementKind;

/// Ordered (keyword, kind) pairs; earlier entries win
pub const ELEMENT_KEYWORDS: &[(&str, ElementKind)] = &[
    ("button", ElementKind::Rectangle),
    ("box", ElementKind::Rectangle),
    ("card", ElementKind::Rectangle),
    ("rectangle", ElementKind::Rectangle),
    ("circle", ElementKind::Ellipse),
    ("ellipse", ElementKind::Ellipse),
    ("text", ElementKind::Text),
    ("label", ElementKind::Text),
    ("heading", ElementKind::Text),
    ("board", ElementKind::Board),
    ("frame", ElementKind::Board),
    ("artboard", ElementKind::Board),
];

/// Kind used when no keyword matches
pub const DEFAULT_KIND: ElementKind = ElementKind::Rectangle;

/// Detect the element kind from normalized (lowercased) text
pub fn detect_element_kind(normalized: &str) -> ElementKind {
    ELEMENT_KEYWORDS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, kind)| *kind)
        .unwrap_or(DEFAULT_KIND)
}
