//! Brand profiles: per-project design tokens
//!
//! Every token is optional. Missing tokens fall back to the translator's
//! defaults and never make a lookup fail.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use validator::Validate;

lazy_static! {
    /// `#RRGGBB`
    pub static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();
}

/// Project identifier → brand profile
pub type ProjectProfiles = BTreeMap<String, ProjectProfile>;

/// Brand color roles, in lookup priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandRole {
    Primary,
    Secondary,
    Accent,
}

impl BrandRole {
    /// Keyword that names this role in an instruction
    pub fn keyword(&self) -> &'static str {
        match self {
            BrandRole::Primary => "primary",
            BrandRole::Secondary => "secondary",
            BrandRole::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BrandColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_REGEX, message = "must be a #RRGGBB color"))]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_REGEX, message = "must be a #RRGGBB color"))]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_REGEX, message = "must be a #RRGGBB color"))]
    pub accent: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BrandColors {
    pub fn get(&self, role: BrandRole) -> Option<&str> {
        match role {
            BrandRole::Primary => self.primary.as_deref(),
            BrandRole::Secondary => self.secondary.as_deref(),
            BrandRole::Accent => self.accent.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.secondary.is_none()
            && self.accent.is_none()
            && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Typography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub body: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Typography {
    pub fn is_empty(&self) -> bool {
        self.heading.is_none() && self.body.is_none() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    /// Base spacing unit in pixels; any JSON number, kept as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Spacing {
    pub fn is_empty(&self) -> bool {
        self.unit.is_none() && self.extra.is_empty()
    }
}

/// Design tokens for one project.
///
/// Keys this type does not model are kept in `extra` so a load/save cycle
/// does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProjectProfile {
    #[serde(default, skip_serializing_if = "BrandColors::is_empty")]
    #[validate(nested)]
    pub brand_colors: BrandColors,
    #[serde(default, skip_serializing_if = "Typography::is_empty")]
    #[validate(nested)]
    pub typography: Typography,
    #[serde(default, skip_serializing_if = "Spacing::is_empty")]
    pub spacing: Spacing,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectProfile {
    pub fn brand_color(&self, role: BrandRole) -> Option<&str> {
        self.brand_colors.get(role)
    }

    pub fn body_font(&self) -> Option<&str> {
        self.typography.body.as_deref()
    }
}

/// Profiles seeded when no configuration file exists yet
pub fn default_profiles() -> ProjectProfiles {
    let compel_english = ProjectProfile {
        brand_colors: BrandColors {
            primary: Some("#FF5733".to_string()),
            secondary: Some("#2e3434".to_string()),
            accent: Some("#FFC300".to_string()),
            extra: Map::new(),
        },
        typography: Typography {
            heading: Some("Inter".to_string()),
            body: Some("Open Sans".to_string()),
            extra: Map::new(),
        },
        spacing: Spacing {
            unit: Some(Number::from(8)),
            extra: Map::new(),
        },
        extra: Map::new(),
    };

    let mut profiles = ProjectProfiles::new();
    profiles.insert("compel-english".to_string(), compel_english);
    profiles
}
