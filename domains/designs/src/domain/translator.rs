//! Natural-language command translation
//!
//! `translate` is a pure function of the instruction and a profile snapshot.
//! `CommandTranslator` binds it to the project configuration store.

use std::sync::Arc;

use super::detector::detect_element_kind;
use super::entities::{Command, ElementKind, PropertyBag};
use super::extractors::{
    extract_color, extract_corner_radius, extract_dimensions, extract_font_family, extract_name,
    extract_text_content,
};
use super::instruction::Instruction;
use super::profile::ProjectProfile;
use crate::repository::ProjectConfigStore;

/// Translate one instruction against a project profile
pub fn translate(text: &str, profile: &ProjectProfile) -> Command {
    let instruction = Instruction::new(text);
    let kind = detect_element_kind(instruction.normalized());

    let mut properties = PropertyBag::new();
    properties.set_name(extract_name(&instruction));

    let dimensions = extract_dimensions(&instruction, kind);
    if let Some(width) = dimensions.width {
        properties.set_width(width);
    }
    if let Some(height) = dimensions.height {
        properties.set_height(height);
    }

    if let Some(color) = extract_color(&instruction, profile) {
        properties.set_fill(color);
    }

    if let Some(radius) = extract_corner_radius(&instruction) {
        properties.set_border_radius(radius);
    }

    if kind == ElementKind::Text {
        properties.set_text(extract_text_content(&instruction));
        properties.set_font_family(extract_font_family(profile));
    }

    tracing::debug!(
        instruction = %text,
        kind = %kind,
        property_count = properties.len(),
        "Translated instruction"
    );

    Command::new(kind, properties)
}

/// Translator bound to the project configuration store.
///
/// Each call reads one snapshot of the store, so a concurrent save or reload
/// never shows a half-updated profile.
#[derive(Clone)]
pub struct CommandTranslator {
    store: Arc<ProjectConfigStore>,
}

impl CommandTranslator {
    pub fn new(store: Arc<ProjectConfigStore>) -> Self {
        Self { store }
    }

    /// Translate `text` using the profile of `project_id`; unknown projects use
    /// an empty profile.
    pub fn translate(&self, text: &str, project_id: &str) -> Command {
        let snapshot = self.store.snapshot();
        match snapshot.get(project_id) {
            Some(profile) => translate(text, profile),
            None => {
                tracing::debug!(project_id, "Unknown project, using default profile");
                translate(text, &ProjectProfile::default())
            }
        }
    }
}
