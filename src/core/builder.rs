//! Builder identifiers - the closed set of bundlers Nitro can drive.
//!
//! The set is versioned with this crate and is not user-extensible. Exactly
//! one member is bundled with Nitro itself and never needs probing.

use serde::{Deserialize, Serialize};

use crate::resolve::errors::ResolveError;

/// Unique identifier for a supported builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderId {
    /// Rolldown, shipped as a direct dependency of Nitro
    Rolldown,
    /// Rollup
    Rollup,
    /// Vite, driven through the `nitro()` plugin
    Vite,
}

impl BuilderId {
    /// Every supported builder, in the order they are reported to users.
    pub const ALL: [BuilderId; 3] = [BuilderId::Rolldown, BuilderId::Rollup, BuilderId::Vite];

    /// The builder that is always installed alongside Nitro.
    pub const BUNDLED: BuilderId = BuilderId::Rolldown;

    /// The builder whose project config is inspected during auto-detection.
    pub const COMPANION: BuilderId = BuilderId::Vite;

    /// Get the builder name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuilderId::Rolldown => "rolldown",
            BuilderId::Rollup => "rollup",
            BuilderId::Vite => "vite",
        }
    }

    /// npm package that provides this builder.
    pub fn package_name(&self) -> &'static str {
        self.as_str()
    }

    /// Whether this builder ships with Nitro and skips availability checks.
    pub fn is_bundled(&self) -> bool {
        *self == Self::BUNDLED
    }

    /// Short human description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            BuilderId::Rolldown => "Rust-based bundler bundled with Nitro",
            BuilderId::Rollup => "Rollup module bundler",
            BuilderId::Vite => "Vite dev server and build via the nitro() plugin",
        }
    }

    /// Supported names joined for diagnostics (`rolldown, rollup, vite`).
    pub fn supported_list() -> String {
        join_ids(&Self::ALL)
    }
}

/// Join builder ids with `", "`.
pub fn join_ids(ids: &[BuilderId]) -> String {
    ids.iter()
        .map(BuilderId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for BuilderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BuilderId {
    type Err = ResolveError;

    /// Matching is exact: `Vite` is not `vite`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuilderId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ResolveError::InvalidBuilder {
                name: s.to_string(),
                supported: BuilderId::ALL.to_vec(),
            })
    }
}
