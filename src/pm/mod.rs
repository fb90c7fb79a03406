//! JavaScript package managers.
//!
//! Detects which package manager a project uses and knows how each one adds
//! a development dependency.

pub mod installer;

use std::fs;
use std::path::Path;

use serde::Deserialize;

pub use installer::PackageManagerInstaller;

/// A supported package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
    Deno,
}

impl PackageManager {
    /// Get the package manager name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
        }
    }

    /// Executable to run.
    pub fn command(&self) -> &'static str {
        self.as_str()
    }

    /// Lockfiles that identify this package manager.
    pub fn lockfiles(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["package-lock.json"],
            PackageManager::Pnpm => &["pnpm-lock.yaml"],
            PackageManager::Yarn => &["yarn.lock"],
            PackageManager::Bun => &["bun.lockb", "bun.lock"],
            PackageManager::Deno => &["deno.lock"],
        }
    }

    /// Arguments that add `package` as a dev dependency of the project at `root`.
    pub fn add_dev_args(&self, package: &str, root: &Path) -> Vec<String> {
        let mut args = match self {
            PackageManager::Npm => vec!["install", "-D"],
            PackageManager::Pnpm => vec!["add", "-D"],
            PackageManager::Yarn => vec!["add", "-D"],
            PackageManager::Bun => vec!["add", "-D"],
            PackageManager::Deno => vec!["add", "-D"],
        }
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

        if *self == PackageManager::Pnpm && root.join("pnpm-workspace.yaml").exists() {
            args.push("-w".to_string());
        }

        match self {
            PackageManager::Deno => args.push(format!("npm:{}", package)),
            _ => args.push(package.to_string()),
        }

        args
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = PackageManagerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            "deno" => Ok(PackageManager::Deno),
            _ => Err(PackageManagerParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown package manager name.
#[derive(Debug, Clone)]
pub struct PackageManagerParseError(pub String);

impl std::fmt::Display for PackageManagerParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid package manager '{}', valid values: npm, pnpm, yarn, bun, deno",
            self.0
        )
    }
}

impl std::error::Error for PackageManagerParseError {}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RootManifest {
    package_manager: Option<String>,
}

/// Order in which lockfiles are checked within one directory.
const LOCKFILE_PRIORITY: [PackageManager; 5] = [
    PackageManager::Pnpm,
    PackageManager::Yarn,
    PackageManager::Npm,
    PackageManager::Bun,
    PackageManager::Deno,
];

/// Detect the package manager for the project at `root`.
///
/// Order: the `packageManager` field of `<root>/package.json`, then the
/// nearest lockfile walking upward from `root`, then npm.
pub fn detect(root: &Path) -> PackageManager {
    if let Some(pm) = from_manifest(root) {
        tracing::debug!(package_manager = %pm, "detected from package.json");
        return pm;
    }

    for dir in root.ancestors() {
        for pm in LOCKFILE_PRIORITY {
            if pm.lockfiles().iter().any(|f| dir.join(f).is_file()) {
                tracing::debug!(package_manager = %pm, dir = %dir.display(), "detected from lockfile");
                return pm;
            }
        }
    }

    PackageManager::Npm
}

/// Parse `"pnpm@9.1.0"`-style `packageManager` values.
fn from_manifest(root: &Path) -> Option<PackageManager> {
    let contents = fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: RootManifest = serde_json::from_str(&contents).ok()?;
    let spec = manifest.package_manager?;
    let name = spec.split('@').next()?;
    name.parse().ok()
}
