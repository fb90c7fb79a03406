//! Per-call resolution state and the process environment snapshot.

use std::path::{Path, PathBuf};

use crate::core::builder::BuilderId;
use crate::core::options::BuildOptions;

/// Environment variable carrying a default builder name.
pub const BUILDER_ENV_VAR: &str = "NITRO_BUILDER";

/// Environment values read once at process start.
///
/// The resolver never reads the environment itself; callers capture a
/// snapshot and pass the relevant value into each resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    builder: Option<String>,
}

impl EnvSnapshot {
    /// Read the builder override from the current process environment.
    pub fn capture() -> Self {
        EnvSnapshot {
            builder: std::env::var(BUILDER_ENV_VAR).ok(),
        }
    }

    /// Snapshot with an explicit builder value.
    pub fn with_builder(builder: impl Into<String>) -> Self {
        EnvSnapshot {
            builder: Some(builder.into()),
        }
    }

    /// The builder override, if set.
    pub fn builder(&self) -> Option<&str> {
        self.builder.as_deref()
    }
}

/// State of a single resolution call.
///
/// Created from the caller's options, exclusively owned by the resolver for
/// the duration of the call, and dropped once the resolved identifier has
/// been copied back out.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    root: PathBuf,
    requested: Option<String>,
    resolved: Option<BuilderId>,
}

impl ResolutionContext {
    /// Build a context, applying the environment override as a default.
    ///
    /// A configured builder always wins over the environment. Empty strings
    /// on either side count as unset.
    pub fn new(options: &BuildOptions, env_override: Option<&str>) -> Self {
        // An empty configured builder falls through to the environment value
        // instead of pinning auto-detection.
        let requested = non_empty(options.builder.as_deref())
            .or_else(|| non_empty(env_override))
            .map(str::to_string);

        ResolutionContext {
            root: options.root_dir.clone(),
            requested,
            resolved: None,
        }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Explicitly requested builder name.
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Builder chosen so far.
    pub fn resolved(&self) -> Option<BuilderId> {
        self.resolved
    }

    pub(crate) fn set_resolved(&mut self, id: BuilderId) {
        self.resolved = Some(id);
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
