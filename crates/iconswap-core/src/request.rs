use crate::platform::{IconKind, Platform};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs to one replacement run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRequest {
    /// Root of a previously built native project
    pub project_root: PathBuf,
    /// Platforms to replace icons for
    #[serde(default)]
    pub platforms: BTreeSet<Platform>,
    /// Source image per icon kind
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sources: BTreeMap<IconKind, PathBuf>,
}

impl IconRequest {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        IconRequest {
            project_root: project_root.into(),
            platforms: BTreeSet::new(),
            sources: BTreeMap::new(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platforms.insert(platform);
        self
    }

    pub fn with_source(mut self, kind: IconKind, path: impl Into<PathBuf>) -> Self {
        self.sources.insert(kind, path.into());
        self
    }

    pub fn source(&self, kind: IconKind) -> Option<&Path> {
        self.sources.get(&kind).map(PathBuf::as_path)
    }

    pub fn is_enabled(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Check the run preconditions.
    ///
    /// At least one platform must be enabled and the project root must name
    /// an existing directory. Nothing is written when this fails.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.project_root.as_os_str().is_empty() {
            return Err(RequestError::EmptyProjectRoot);
        }
        if self.platforms.is_empty() {
            return Err(RequestError::NoPlatforms);
        }
        if !self.project_root.exists() {
            return Err(RequestError::ProjectRootMissing(self.project_root.clone()));
        }
        if !self.project_root.is_dir() {
            return Err(RequestError::ProjectRootNotDirectory(
                self.project_root.clone(),
            ));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<IconRequest, RequestError> {
        let content = fs::read_to_string(path).map_err(|e| RequestError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| RequestError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), RequestError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| RequestError::Save {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, content).map_err(|e| RequestError::Save {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// A request that cannot be run at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No project root was given
    EmptyProjectRoot,
    /// No platform is enabled
    NoPlatforms,
    /// Project root does not exist
    ProjectRootMissing(PathBuf),
    /// Project root exists but is not a directory
    ProjectRootNotDirectory(PathBuf),
    /// Request file could not be read or parsed
    Load { path: PathBuf, reason: String },
    /// Request file could not be written
    Save { path: PathBuf, reason: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::EmptyProjectRoot => write!(f, "no project root selected"),
            RequestError::NoPlatforms => write!(f, "no platform selected"),
            RequestError::ProjectRootMissing(path) => {
                write!(
                    f,
                    "project root {} does not exist, build the project first",
                    path.display()
                )
            }
            RequestError::ProjectRootNotDirectory(path) => {
                write!(f, "project root {} is not a directory", path.display())
            }
            RequestError::Load { path, reason } => {
                write!(f, "failed to load request {}: {}", path.display(), reason)
            }
            RequestError::Save { path, reason } => {
                write!(f, "failed to save request {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for RequestError {}
