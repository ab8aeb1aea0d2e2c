//! Domain entities for the Designs domain
//!
//! A translated instruction becomes a `Command`: the element kind to create and
//! the property bag handed to the design backend.

use std::fmt;

use designbridge_penpot::CreateOperation;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Property keys understood by the design backend
pub mod keys {
    pub const NAME: &str = "name";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const FILLS: &str = "fills";
    pub const BORDER_RADIUS: &str = "borderRadius";
    pub const TEXT: &str = "text";
    pub const FONT_FAMILY: &str = "fontFamily";
}

/// Category of design primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    Text,
    Board,
    /// Reserved: no detection keywords or backend operation yet
    Path,
    /// Reserved: no detection keywords or backend operation yet
    Group,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Rectangle => "rectangle",
            ElementKind::Ellipse => "ellipse",
            ElementKind::Text => "text",
            ElementKind::Board => "board",
            ElementKind::Path => "path",
            ElementKind::Group => "group",
        }
    }

    /// Backend operation that creates this kind, if there is one
    pub fn create_operation(&self) -> Option<CreateOperation> {
        match self {
            ElementKind::Rectangle => Some(CreateOperation::Rectangle),
            ElementKind::Ellipse => Some(CreateOperation::Ellipse),
            ElementKind::Text => Some(CreateOperation::Text),
            ElementKind::Board => Some(CreateOperation::Board),
            ElementKind::Path | ElementKind::Group => None,
        }
    }
}

impl fmt::Display for ElementKind {
    #[mutants::skip] // Delegates to as_str()
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Solid fill applied to a shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub fill_color: String,
}

/// Attributes attached to a creation command.
///
/// Keys are unique and a missing key means "unspecified"; the bag never holds
/// a `null` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(Map<String, Value>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from caller-supplied properties, dropping `null` values
    pub fn from_explicit(properties: Map<String, Value>) -> Self {
        let mut bag = Self::new();
        bag.overlay(properties);
        bag
    }

    /// Overlay explicit properties key by key; explicit values win.
    pub fn overlay(&mut self, explicit: Map<String, Value>) {
        for (key, value) in explicit {
            if !value.is_null() {
                self.0.insert(key, value);
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.0.insert(keys::NAME.to_string(), Value::String(name.into()));
    }

    pub fn set_width(&mut self, width: u32) {
        self.0.insert(keys::WIDTH.to_string(), json!(width));
    }

    pub fn set_height(&mut self, height: u32) {
        self.0.insert(keys::HEIGHT.to_string(), json!(height));
    }

    /// Set the single solid fill
    pub fn set_fill(&mut self, color: impl Into<String>) {
        let fills = vec![Fill {
            fill_color: color.into(),
        }];
        self.0.insert(keys::FILLS.to_string(), json!(fills));
    }

    pub fn set_border_radius(&mut self, radius: u32) {
        self.0.insert(keys::BORDER_RADIUS.to_string(), json!(radius));
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.0.insert(keys::TEXT.to_string(), Value::String(text.into()));
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.0
            .insert(keys::FONT_FAMILY.to_string(), Value::String(family.into()));
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str(keys::NAME)
    }

    pub fn width(&self) -> Option<u64> {
        self.0.get(keys::WIDTH).and_then(Value::as_u64)
    }

    pub fn height(&self) -> Option<u64> {
        self.0.get(keys::HEIGHT).and_then(Value::as_u64)
    }

    pub fn fills(&self) -> Option<Vec<Fill>> {
        self.0
            .get(keys::FILLS)
            .and_then(|fills| serde_json::from_value(fills.clone()).ok())
    }

    /// Color of the first fill
    pub fn fill_color(&self) -> Option<String> {
        self.fills()
            .and_then(|fills| fills.into_iter().next())
            .map(|fill| fill.fill_color)
    }

    pub fn border_radius(&self) -> Option<u64> {
        self.0.get(keys::BORDER_RADIUS).and_then(Value::as_u64)
    }

    pub fn text(&self) -> Option<&str> {
        self.get_str(keys::TEXT)
    }

    pub fn font_family(&self) -> Option<&str> {
        self.get_str(keys::FONT_FAMILY)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Result of translating one instruction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    #[serde(rename = "element_type")]
    pub kind: ElementKind,
    pub properties: PropertyBag,
}

impl Command {
    pub fn new(kind: ElementKind, properties: PropertyBag) -> Self {
        Self { kind, properties }
    }
}
