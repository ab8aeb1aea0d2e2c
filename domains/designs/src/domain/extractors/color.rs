//! Fill color extraction

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::instruction::Instruction;
use crate::domain::profile::{BrandRole, ProjectProfile};

lazy_static! {
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"#[0-9A-Fa-f]{6}").unwrap();
}

/// Brand roles in lookup order. The order is fixed and does not follow the
/// order the keywords appear in the instruction.
const BRAND_PRIORITY: [BrandRole; 3] = [BrandRole::Primary, BrandRole::Secondary, BrandRole::Accent];

/// Brand color named in the text (and defined by the profile), else a literal
/// `#RRGGBB` token as written.
pub fn extract_color(instruction: &Instruction<'_>, profile: &ProjectProfile) -> Option<String> {
    let brand = BRAND_PRIORITY.iter().find_map(|role| {
        if instruction.mentions(role.keyword()) {
            profile.brand_color(*role)
        } else {
            None
        }
    });

    brand
        .or_else(|| HEX_COLOR_REGEX.find(instruction.raw()).map(|m| m.as_str()))
        .map(str::to_string)
}
