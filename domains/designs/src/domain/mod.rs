//! Domain layer for the Designs domain
//!
//! Translation runs leaf-first: the instruction is normalized, the element
//! kind detected, then each extractor contributes to the property bag.

pub mod detector;
pub mod entities;
pub mod extractors;
pub mod instruction;
pub mod profile;
pub mod translator;
