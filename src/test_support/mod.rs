//! Test utilities and mocks for unit tests.
//!
//! Provides recording implementations of the resolver's collaborators so
//! tests can script prompt answers and inspect what the resolver asked for.
//!
//! # Example
//!
//! ```rust,ignore
//! use nitro_builder::test_support::{RecordingInstaller, ScriptedPrompt, StaticProbe};
//!
//! let probe = StaticProbe::new(["vite"]);
//! let prompt = ScriptedPrompt::new(InstallDecision::Accept);
//! let installer = RecordingInstaller::new();
//! let resolver = Resolver::new(&probe, &prompt, &installer);
//! ```

pub mod fixtures;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Result};

use crate::resolve::probe::PackageProbe;
use crate::resolve::provision::{
    ConfirmPrompt, ConfirmRequest, DevDependencyInstaller, InstallDecision,
};

/// Probe that answers from a fixed set of installed package names.
#[derive(Debug, Default)]
pub struct StaticProbe {
    installed: HashSet<String>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl StaticProbe {
    /// Create a probe reporting `installed` as resolvable.
    pub fn new<I, S>(installed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticProbe {
            installed: installed.into_iter().map(Into::into).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a probe for which nothing is installed.
    pub fn empty() -> Self {
        StaticProbe::default()
    }

    /// Package names probed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    /// Roots probed so far, in order.
    pub fn roots(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }
}

impl PackageProbe for StaticProbe {
    fn is_resolvable(&self, package: &str, root: &Path) -> bool {
        self.calls
            .lock()
            .unwrap()
            .push((package.to_string(), root.to_path_buf()));
        self.installed.contains(package)
    }
}

/// Prompt that always gives the same answer and records each request.
#[derive(Debug)]
pub struct ScriptedPrompt {
    decision: InstallDecision,
    requests: Mutex<Vec<ConfirmRequest>>,
}

impl ScriptedPrompt {
    pub fn new(decision: InstallDecision) -> Self {
        ScriptedPrompt {
            decision,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ConfirmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, request: &ConfirmRequest) -> InstallDecision {
        self.requests.lock().unwrap().push(request.clone());
        self.decision
    }
}

/// Installer that records calls and optionally fails.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    failure: Option<String>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingInstaller {
    /// Create an installer that always succeeds.
    pub fn new() -> Self {
        RecordingInstaller::default()
    }

    /// Create an installer that fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        RecordingInstaller {
            failure: Some(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(package, cwd)` pairs received so far.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DevDependencyInstaller for RecordingInstaller {
    fn add_dev_dependency(&self, package: &str, cwd: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((package.to_string(), cwd.to_path_buf()));

        match self.failure {
            Some(ref message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}
