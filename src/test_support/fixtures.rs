//! Test fixtures for on-disk Node projects.
//!
//! Lays out `package.json`, installed `node_modules` packages, lockfiles and
//! Vite configs under a directory so the real probe and detector can run
//! against them.

use std::fs;
use std::path::{Path, PathBuf};

/// Install a minimal package at `<root>/node_modules/<name>`.
///
/// Returns the package directory.
pub fn install_package(root: &Path, name: &str) -> PathBuf {
    let dir = install_package_with_manifest(
        root,
        name,
        &format!(r#"{{ "name": "{name}", "version": "1.0.0", "main": "index.js" }}"#),
    );
    fs::write(dir.join("index.js"), "module.exports = {};\n").unwrap();
    dir
}

/// Create `<root>/node_modules/<name>` with the given `package.json` text
/// and nothing else.
pub fn install_package_with_manifest(root: &Path, name: &str, manifest: &str) -> PathBuf {
    let dir = root.join("node_modules").join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("package.json"), manifest).unwrap();
    dir
}

/// Write `vite.config<ext>` under `root`.
pub fn write_vite_config(root: &Path, ext: &str, contents: &str) -> PathBuf {
    let path = root.join(format!("vite.config{}", ext));
    fs::write(&path, contents).unwrap();
    path
}

/// Fixture for a complete Node project.
#[derive(Debug, Clone, Default)]
pub struct ProjectFixture {
    /// package.json content (None = no manifest)
    pub manifest: Option<String>,
    /// Packages installed under node_modules
    pub installed: Vec<String>,
    /// Vite config (extension, content)
    pub vite_config: Option<(String, String)>,
    /// Lockfile names to create empty
    pub lockfiles: Vec<String>,
}

impl ProjectFixture {
    /// Create an empty project fixture.
    pub fn new() -> Self {
        ProjectFixture::default()
    }

    /// Project with a Vite config that enables the Nitro plugin.
    pub fn vite_app() -> Self {
        ProjectFixture::new()
            .with_manifest(r#"{ "name": "app", "private": true }"#)
            .with_package("vite")
            .with_vite_config(".ts", vite_configs::WITH_NITRO)
    }

    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = Some(manifest.into());
        self
    }

    pub fn with_package(mut self, name: impl Into<String>) -> Self {
        self.installed.push(name.into());
        self
    }

    pub fn with_vite_config(mut self, ext: impl Into<String>, content: impl Into<String>) -> Self {
        self.vite_config = Some((ext.into(), content.into()));
        self
    }

    pub fn with_lockfile(mut self, name: impl Into<String>) -> Self {
        self.lockfiles.push(name.into());
        self
    }

    /// Write the project to `root`.
    pub fn write_to(&self, root: &Path) -> std::io::Result<()> {
        fs::create_dir_all(root)?;

        if let Some(ref manifest) = self.manifest {
            fs::write(root.join("package.json"), manifest)?;
        }
        for name in &self.installed {
            install_package(root, name);
        }
        if let Some((ref ext, ref content)) = self.vite_config {
            write_vite_config(root, ext, content);
        }
        for lockfile in &self.lockfiles {
            fs::write(root.join(lockfile), "")?;
        }

        Ok(())
    }
}

/// Sample Vite config files.
pub mod vite_configs {
    /// Config that registers the Nitro plugin.
    pub const WITH_NITRO: &str = r#"import { defineConfig } from "vite";
import { nitro } from "nitro/vite";

export default defineConfig({
  plugins: [nitro()],
});
"#;

    /// Config without the Nitro plugin.
    pub const WITHOUT_NITRO: &str = r#"import { defineConfig } from "vite";
import vue from "@vitejs/plugin-vue";

export default defineConfig({
  plugins: [vue()],
});
"#;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_vite_app_fixture() {
        let tmp = TempDir::new().unwrap();
        ProjectFixture::vite_app()
            .with_lockfile("pnpm-lock.yaml")
            .write_to(tmp.path())
            .unwrap();

        assert!(tmp.path().join("package.json").exists());
        assert!(tmp.path().join("node_modules/vite/package.json").exists());
        assert!(tmp.path().join("vite.config.ts").exists());
        assert!(tmp.path().join("pnpm-lock.yaml").exists());
    }
}
