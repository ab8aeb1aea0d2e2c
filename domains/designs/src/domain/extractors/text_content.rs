//! Text content and font extraction for text elements

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::instruction::Instruction;
use crate::domain::profile::ProjectProfile;

lazy_static! {
    /// `text: <content>` up to " with", " at", or the end
    static ref TEXT_CONTENT_REGEX: Regex =
        Regex::new(r"(?i)text[:\s]+(.+?)(?:\s+with|\s+at|$)").unwrap();
}

pub const FALLBACK_TEXT: &str = "Text";
pub const FALLBACK_FONT_FAMILY: &str = "Open Sans";

/// Quoted text verbatim, else the content after `text`, else "Text"
pub fn extract_text_content(instruction: &Instruction<'_>) -> String {
    if let Some(quoted) = instruction.quoted() {
        return quoted.to_string();
    }

    TEXT_CONTENT_REGEX
        .captures(instruction.raw())
        .and_then(|caps| caps.get(1))
        .map(|content| content.as_str().trim())
        .filter(|content| !content.is_empty())
        .unwrap_or(FALLBACK_TEXT)
        .to_string()
}

/// Body font from the profile, else "Open Sans"
pub fn extract_font_family(profile: &ProjectProfile) -> String {
    profile
        .body_font()
        .unwrap_or(FALLBACK_FONT_FAMILY)
        .to_string()
}
