//! File-backed project configuration store
//!
//! The file is a JSON object keyed by project identifier. Readers take an
//! `Arc` snapshot; writers build a complete new map, persist it, and swap the
//! snapshot in one step.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use designbridge_common::Error;

use crate::domain::profile::{default_profiles, ProjectProfile, ProjectProfiles};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read project config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write project config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid project config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize project config: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<StoreError> for Error {
    fn from(error: StoreError) -> Self {
        Error::Internal(error.to_string())
    }
}

/// Project identifier → brand profile, backed by a JSON file
#[derive(Debug)]
pub struct ProjectConfigStore {
    path: PathBuf,
    snapshot: RwLock<Arc<ProjectProfiles>>,
    write_lock: Mutex<()>,
}

impl ProjectConfigStore {
    /// Load the store from `path`, seeding and persisting the built-in
    /// profile when the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let profiles = if path.exists() {
            let profiles = read_profiles(&path)?;
            tracing::info!(path = %path.display(), projects = profiles.len(), "Loaded project config");
            profiles
        } else {
            let profiles = default_profiles();
            write_profiles(&path, &profiles)?;
            tracing::info!(path = %path.display(), "Created default project config");
            profiles
        };

        Ok(Self {
            path,
            snapshot: RwLock::new(Arc::new(profiles)),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consistent view of every profile at this moment
    pub fn snapshot(&self) -> Arc<ProjectProfiles> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Profile of `project_id`, if configured
    pub fn get(&self, project_id: &str) -> Option<ProjectProfile> {
        self.snapshot().get(project_id).cloned()
    }

    /// Insert or replace one profile and persist the whole configuration
    pub fn save_project(
        &self,
        project_id: &str,
        profile: ProjectProfile,
    ) -> Result<Arc<ProjectProfiles>, StoreError> {
        let _writer = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut profiles = ProjectProfiles::clone(&self.snapshot());
        profiles.insert(project_id.to_string(), profile);
        write_profiles(&self.path, &profiles)?;

        tracing::info!(project_id, "Saved project profile");
        Ok(self.swap(profiles))
    }

    /// Re-read the configuration file
    pub fn reload(&self) -> Result<Arc<ProjectProfiles>, StoreError> {
        let _writer = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let profiles = read_profiles(&self.path)?;
        tracing::info!(projects = profiles.len(), "Reloaded project config");
        Ok(self.swap(profiles))
    }

    fn swap(&self, profiles: ProjectProfiles) -> Arc<ProjectProfiles> {
        let profiles = Arc::new(profiles);
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::clone(&profiles);
        profiles
    }
}

fn read_profiles(path: &Path) -> Result<ProjectProfiles, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write to a sibling temp file, then rename over the target
fn write_profiles(path: &Path, profiles: &ProjectProfiles) -> Result<(), StoreError> {
    let body = serde_json::to_string_pretty(profiles)?;
    let tmp = path.with_extension("json.tmp");

    fs::write(&tmp, body)
        .and_then(|_| fs::rename(&tmp, path))
        .map_err(|source| {
            // The rename error is the one reported
            let _ = fs::remove_file(&tmp);
            StoreError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
}
