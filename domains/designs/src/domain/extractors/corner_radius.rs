//! Corner radius extraction

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::instruction::Instruction;

lazy_static! {
    static ref RADIUS_REGEX: Regex = Regex::new(r"radius[:\s]*([0-9]+)").unwrap();
}

pub const ROUNDED_RADIUS: u32 = 12;
pub const SHARP_RADIUS: u32 = 0;
pub const BUTTON_RADIUS: u32 = 8;

/// Only the first matching rule applies:
/// rounded (explicit radius or 12), then sharp/square (0), then cta/button (8).
pub fn extract_corner_radius(instruction: &Instruction<'_>) -> Option<u32> {
    if instruction.mentions("rounded") {
        let explicit = RADIUS_REGEX
            .captures(instruction.normalized())
            .and_then(|caps| caps[1].parse::<u32>().ok());
        return Some(explicit.unwrap_or(ROUNDED_RADIUS));
    }

    if instruction.mentions("sharp") || instruction.mentions("square") {
        return Some(SHARP_RADIUS);
    }

    if instruction.mentions("cta") || instruction.mentions("button") {
        return Some(BUTTON_RADIUS);
    }

    None
}
