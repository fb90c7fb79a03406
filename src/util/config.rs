//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.nitro/config.toml` - User-wide defaults
//! - Project: `<root>/.nitro/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.
//!
//! ```toml
//! [build]
//! builder = "vite"
//!
//! [install]
//! package-manager = "pnpm"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::options::BuildOptions;
use crate::pm::PackageManager;

/// Resolver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,

    /// Installation settings
    pub install: InstallConfig,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Builder to use (rolldown, rollup, vite); unset = auto-detect
    pub builder: Option<String>,
}

/// Installation-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InstallConfig {
    /// Package manager used to install missing builders (npm, pnpm, yarn, bun, deno)
    pub package_manager: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.builder.is_some() {
            self.build.builder = other.build.builder;
        }
        if other.install.package_manager.is_some() {
            self.install.package_manager = other.install.package_manager;
        }
    }

    /// Parse the configured package manager.
    ///
    /// The builder name is not parsed here; the resolver validates it.
    pub fn package_manager(&self) -> Result<Option<PackageManager>> {
        self.install
            .package_manager
            .as_deref()
            .map(|s| s.parse::<PackageManager>())
            .transpose()
            .context("invalid `install.package-manager` setting")
    }

    /// Build options for the project at `root`.
    pub fn build_options(&self, root: impl Into<PathBuf>) -> BuildOptions {
        BuildOptions {
            root_dir: root.into(),
            builder: self.build.builder.clone(),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (`<root>/.nitro/config.toml`)
/// 2. Global config (`~/.nitro/config.toml`)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Load the merged configuration for a project root.
pub fn load_for_project(root: &Path) -> Config {
    let global = global_config_path();
    load_config(global.as_deref(), &project_config_path(root))
}

/// Get the global config directory (~/.nitro).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".nitro"))
}

/// Get the global config path (~/.nitro/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (<root>/.nitro/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".nitro").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.build.builder.is_none());
        assert!(config.install.package_manager.is_none());
        assert_eq!(config.package_manager().unwrap(), None);
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[build]
builder = "vite"

[install]
package-manager = "pnpm"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.build.builder, Some("vite".to_string()));
        assert_eq!(config.package_manager().unwrap(), Some(PackageManager::Pnpm));
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.build.builder = Some("rollup".to_string());
        base.install.package_manager = Some("yarn".to_string());

        let mut override_cfg = Config::default();
        override_cfg.build.builder = Some("vite".to_string());

        base.merge(override_cfg);

        assert_eq!(base.build.builder, Some("vite".to_string()));
        assert_eq!(base.install.package_manager, Some("yarn".to_string())); // Not overridden
    }

    #[test]
    fn test_invalid_package_manager() {
        let mut config = Config::default();
        config.install.package_manager = Some("cargo".to_string());

        let err = config.package_manager().unwrap_err();
        assert!(format!("{:#}", err).contains("invalid package manager 'cargo'"));
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[build\nbuilder = ").unwrap();

        assert!(Config::load(&config_path).is_err());
        assert_eq!(Config::load_or_default(&config_path), Config::default());
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            r#"
[build]
builder = "rollup"

[install]
package-manager = "bun"
"#,
        )
        .unwrap();

        std::fs::write(
            &project_path,
            r#"
[build]
builder = "vite"
"#,
        )
        .unwrap();

        let config = load_config(Some(&global_path), &project_path);

        assert_eq!(config.build.builder, Some("vite".to_string()));
        assert_eq!(config.install.package_manager, Some("bun".to_string()));
    }

    #[test]
    fn test_build_options_keeps_raw_builder() {
        let mut config = Config::default();
        config.build.builder = Some("webpack".to_string());

        let opts = config.build_options("/srv/app");
        assert_eq!(opts.root_dir, PathBuf::from("/srv/app"));
        assert_eq!(opts.builder.as_deref(), Some("webpack"));
    }

    #[test]
    fn test_project_config_path() {
        assert_eq!(
            project_config_path(Path::new("/srv/app")),
            PathBuf::from("/srv/app/.nitro/config.toml")
        );
    }
}
