//! Package availability probing.
//!
//! Answers "would `require.resolve(package)` succeed from this root?" by
//! walking `node_modules` directories on disk. Nothing is executed, nothing
//! is fetched and nothing is written, so probes are safe to run repeatedly
//! and from several threads at once.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

/// Capability to check whether a package resolves from a directory.
pub trait PackageProbe: Send + Sync {
    /// Returns `true` only if resolution would succeed. Every failure mode
    /// collapses to `false`.
    fn is_resolvable(&self, package: &str, root: &Path) -> bool;
}

/// Probe implementing Node's package lookup over `node_modules`.
///
/// Lookup starts at `root` and walks every ancestor, so nested installs and
/// hoisted workspace dependencies are both found. Symlinked package
/// directories (pnpm, `npm link`) are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeModulesProbe;

impl NodeModulesProbe {
    pub fn new() -> Self {
        NodeModulesProbe
    }

    /// Locate the entry file or directory `package` resolves to.
    pub fn locate(&self, package: &str, root: &Path) -> Option<PathBuf> {
        if !is_valid_package_name(package) {
            tracing::debug!(package, "not a bare package name");
            return None;
        }

        let start = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        for dir in start.ancestors() {
            if dir.file_name().is_some_and(|name| name == "node_modules") {
                continue;
            }

            let candidate = dir.join("node_modules").join(package);
            if let Some(entry) = resolve_package(&candidate) {
                tracing::debug!(package, entry = %entry.display(), "package resolved");
                return Some(entry);
            }
        }

        tracing::debug!(package, root = %root.display(), "package not resolvable");
        None
    }
}

impl PackageProbe for NodeModulesProbe {
    fn is_resolvable(&self, package: &str, root: &Path) -> bool {
        self.locate(package, root).is_some()
    }
}

/// The `package.json` fields that decide the package entry point.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PackageManifest {
    main: Option<String>,
    exports: Option<Value>,
}

const EXTENSIONS: [&str; 3] = [".js", ".json", ".node"];

/// Export conditions matched by a CommonJS `require` from Node.
const CONDITIONS: [&str; 3] = ["node", "require", "default"];

fn resolve_package(candidate: &Path) -> Option<PathBuf> {
    // A single-file module next to node_modules/<name>
    if let Some(file) = load_as_file(candidate) {
        return Some(file);
    }

    // metadata() follows symlinks, so a dangling link fails here
    let meta = fs::metadata(candidate).ok()?;
    if !meta.is_dir() {
        return None;
    }

    let manifest_path = candidate.join("package.json");
    let manifest = match fs::read_to_string(&manifest_path) {
        Ok(contents) => match serde_json::from_str::<PackageManifest>(&contents) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::debug!(
                    path = %manifest_path.display(),
                    error = %e,
                    "malformed package.json"
                );
                return None;
            }
        },
        Err(_) => return load_index(candidate),
    };

    if let Some(exports) = manifest.exports.as_ref() {
        return exports_root(exports).then(|| candidate.to_path_buf());
    }

    if let Some(main) = manifest.main.as_deref().filter(|m| !m.is_empty()) {
        let main_path = candidate.join(main);
        if let Some(entry) = load_as_file(&main_path).or_else(|| load_index(&main_path)) {
            return Some(entry);
        }
    }

    load_index(candidate)
}

fn load_as_file(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    EXTENSIONS
        .iter()
        .map(|ext| append_extension(path, ext))
        .find(|p| p.is_file())
}

fn load_index(dir: &Path) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("index{}", ext)))
        .find(|p| p.is_file())
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(ext);
    PathBuf::from(s)
}

/// Whether an `exports` field exposes the package root (`"."`).
fn exports_root(exports: &Value) -> bool {
    match exports {
        Value::String(_) => true,
        Value::Array(targets) => targets.iter().any(exports_root),
        Value::Object(map) => {
            if map.keys().any(|k| k.starts_with('.')) {
                map.get(".").is_some_and(exports_root)
            } else {
                CONDITIONS
                    .iter()
                    .any(|c| map.get(*c).is_some_and(exports_root))
            }
        }
        _ => false,
    }
}

/// Accepts `name` and `@scope/name`; rejects paths and traversal.
fn is_valid_package_name(package: &str) -> bool {
    if package.is_empty() || package.contains('\\') {
        return false;
    }

    let segments: Vec<&str> = package.split('/').collect();
    let expected = if package.starts_with('@') { 2 } else { 1 };

    segments.len() == expected
        && segments
            .iter()
            .all(|s| !s.is_empty() && *s != "." && *s != ".." && !s.starts_with('.'))
}
