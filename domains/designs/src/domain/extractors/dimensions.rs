//! Width and height extraction

use lazy_static::lazy_static;
use regex::Regex;

use super::positive;
use crate::domain::entities::ElementKind;
use crate::domain::instruction::Instruction;

lazy_static! {
    /// `300x50`, `300 X 50`, `300 × 50`
    static ref SIZE_REGEX: Regex = Regex::new(r"([0-9]+)\s*[xX×]\s*([0-9]+)").unwrap();
    static ref WIDTH_REGEX: Regex = Regex::new(r"width[:\s]*([0-9]+)").unwrap();
    static ref HEIGHT_REGEX: Regex = Regex::new(r"height[:\s]*([0-9]+)").unwrap();
}

/// Extracted size; `None` means unspecified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Dimensions {
    pub fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width, height }
    }

    fn is_unspecified(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Size used when the instruction gives none
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Rectangle => Self::new(Some(200), Some(100)),
            ElementKind::Ellipse => Self::new(Some(100), Some(100)),
            ElementKind::Text => Self::new(Some(200), None),
            ElementKind::Board => Self::new(Some(1920), Some(1080)),
            ElementKind::Path | ElementKind::Group => Self::default(),
        }
    }
}

/// `WxH` first, then independent `width`/`height` mentions, then kind defaults.
///
/// Zero is never a size: a `0` is treated as if the dimension were not given.
pub fn extract_dimensions(instruction: &Instruction<'_>, kind: ElementKind) -> Dimensions {
    let text = instruction.normalized();

    if let Some(caps) = SIZE_REGEX.captures(text) {
        return Dimensions::new(positive(&caps[1]), positive(&caps[2]));
    }

    let labelled = Dimensions::new(labelled(&WIDTH_REGEX, text), labelled(&HEIGHT_REGEX, text));
    if labelled.is_unspecified() {
        Dimensions::default_for(kind)
    } else {
        labelled
    }
}

fn labelled(regex: &Regex, text: &str) -> Option<u32> {
    regex.captures(text).and_then(|caps| positive(&caps[1]))
}
