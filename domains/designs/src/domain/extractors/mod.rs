//! Property extractors
//!
//! Each extractor is a pure function of the instruction (and, for color and
//! text content, the project profile). None of them fail: a value that cannot
//! be determined comes back as `None` and is left out of the property bag.

pub mod color;
pub mod corner_radius;
pub mod dimensions;
pub mod name;
pub mod text_content;

pub use color::extract_color;
pub use corner_radius::extract_corner_radius;
pub use dimensions::{extract_dimensions, Dimensions};
pub use name::extract_name;
pub use text_content::{extract_font_family, extract_text_content};

/// Parse a run of ASCII digits as a positive size
pub(crate) fn positive(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|value| *value > 0)
}
