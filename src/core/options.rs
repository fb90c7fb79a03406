//! Build options owned by the host pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::builder::BuilderId;

/// The slice of pipeline configuration the resolver reads and writes.
///
/// `builder` holds the raw configured name; the resolver writes the
/// resolved identifier back into it on success and leaves it untouched on
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Project root directory
    pub root_dir: PathBuf,

    /// Requested or resolved builder name
    pub builder: Option<String>,
}

impl BuildOptions {
    /// Create options for a project root with no builder configured.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        BuildOptions {
            root_dir: root_dir.into(),
            builder: None,
        }
    }

    /// Set the builder name.
    pub fn with_builder(mut self, builder: impl Into<String>) -> Self {
        self.builder = Some(builder.into());
        self
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    /// Parse the builder field, if it names a supported builder.
    pub fn builder_id(&self) -> Option<BuilderId> {
        self.builder.as_deref().and_then(|s| s.parse().ok())
    }
}
