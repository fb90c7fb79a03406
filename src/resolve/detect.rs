//! Builder auto-detection.
//!
//! Runs only when no builder was requested. Vite is selected when it is
//! installed and the project's Vite config mentions the `nitro(` plugin
//! call; anything else falls back to the bundled builder.
//!
//! Detection is a plain substring search over the config text. The config
//! is never parsed or evaluated, so a marker inside a comment counts and a
//! plugin enabled through a re-exported helper does not.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::builder::BuilderId;
use crate::resolve::probe::PackageProbe;

/// Config file name without extension.
pub const CONFIG_STEM: &str = "vite.config";

/// Config extensions, in lookup order.
pub const CONFIG_EXTENSIONS: [&str; 4] = [".ts", ".mts", ".js", ".mjs"];

/// Literal that marks the Nitro plugin as enabled.
pub const MARKER: &str = "nitro(";

/// What auto-detection looked at and what it chose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// Selected builder
    pub builder: BuilderId,

    /// Whether the companion package resolved from the root
    pub companion_resolvable: bool,

    /// Config file that was inspected, if any
    pub config_file: Option<PathBuf>,

    /// Whether the inspected file contained the marker
    pub marker_found: bool,
}

/// Inspect the project at `root` and choose a builder.
pub fn inspect(root: &Path, probe: &dyn PackageProbe) -> Detection {
    let companion = BuilderId::COMPANION;

    if !probe.is_resolvable(companion.package_name(), root) {
        tracing::debug!("{} not installed, using {}", companion, BuilderId::BUNDLED);
        return Detection {
            builder: BuilderId::BUNDLED,
            companion_resolvable: false,
            config_file: None,
            marker_found: false,
        };
    }

    // The first existing candidate decides; later extensions are not consulted.
    let config_file = find_config_file(root);
    let marker_found = config_file.as_deref().is_some_and(contains_marker);

    let builder = if marker_found {
        companion
    } else {
        BuilderId::BUNDLED
    };

    tracing::debug!(
        config = ?config_file,
        marker_found,
        builder = %builder,
        "auto-detected builder"
    );

    Detection {
        builder,
        companion_resolvable: true,
        config_file,
        marker_found,
    }
}

/// Candidate config paths under `root`, in lookup order.
pub fn config_candidates(root: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    CONFIG_EXTENSIONS
        .iter()
        .map(move |ext| root.join(format!("{}{}", CONFIG_STEM, ext)))
}

/// First candidate config file that exists.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    config_candidates(root).find(|p| p.exists())
}

/// Whether the file at `path` contains [`MARKER`]. Read failures count as
/// "absent"; invalid UTF-8 is decoded lossily.
pub fn contains_marker(path: &Path) -> bool {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).contains(MARKER),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            false
        }
    }
}
