//! Designs domain: natural-language command translation, brand profiles, design API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Command, ElementKind, Fill, PropertyBag};
pub use domain::instruction::Instruction;
pub use domain::profile::{
    default_profiles, BrandColors, BrandRole, ProjectProfile, ProjectProfiles, Spacing, Typography,
};
pub use domain::translator::{translate, CommandTranslator};

// Re-export repository types
pub use repository::{ProjectConfigStore, StoreError};

// Re-export API types
pub use api::routes;
pub use api::DesignsState;
