//! Designs domain state

use std::sync::Arc;

use designbridge_penpot::PenpotService;

use crate::domain::translator::CommandTranslator;
use crate::repository::ProjectConfigStore;

/// Application state for the Designs domain
#[derive(Clone)]
pub struct DesignsState {
    pub translator: CommandTranslator,
    pub store: Arc<ProjectConfigStore>,
    pub penpot: Arc<dyn PenpotService>,
    /// Base URL used to build element preview links
    pub penpot_url: String,
    /// Project used when a request names none
    pub default_project: String,
}

impl DesignsState {
    pub fn new(
        store: Arc<ProjectConfigStore>,
        penpot: Arc<dyn PenpotService>,
        penpot_url: impl Into<String>,
        default_project: impl Into<String>,
    ) -> Self {
        Self {
            translator: CommandTranslator::new(Arc::clone(&store)),
            store,
            penpot,
            penpot_url: penpot_url.into(),
            default_project: default_project.into(),
        }
    }

    /// Project named by the request, else the configured default
    pub fn project_or_default<'a>(&'a self, project: Option<&'a str>) -> &'a str {
        project
            .filter(|project| !project.is_empty())
            .unwrap_or(&self.default_project)
    }

    pub fn preview_url(&self, element_id: &str) -> String {
        format!(
            "{}/view/{}",
            self.penpot_url.trim_end_matches('/'),
            element_id
        )
    }
}
