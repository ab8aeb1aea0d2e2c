//! A natural-language instruction prepared for matching

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref QUOTED_REGEX: Regex = Regex::new(r#""([^"]+)""#).unwrap();
}

/// The caller's instruction alongside its lowercased form.
///
/// Keyword matching runs against `normalized`; verbatim captures (quoted
/// strings, hex colors, text content) are read from `raw` so their case is
/// preserved.
#[derive(Debug, Clone)]
pub struct Instruction<'a> {
    raw: &'a str,
    normalized: String,
}

impl<'a> Instruction<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: raw.to_lowercase(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether `keyword` occurs anywhere in the normalized text
    pub fn mentions(&self, keyword: &str) -> bool {
        self.normalized.contains(keyword)
    }

    /// Contents of the first double-quoted substring
    pub fn quoted(&self) -> Option<&'a str> {
        QUOTED_REGEX
            .captures(self.raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
