//! Provisioning of missing builder packages.
//!
//! When a requested builder is not installed the operator is asked whether
//! to install it. Accepting hands the package to a dev-dependency installer;
//! declining or cancelling is fatal for the resolution.

use std::path::Path;

use anyhow::Result;

use crate::resolve::errors::ResolveError;

/// Outcome of an installation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallDecision {
    /// Operator agreed to install
    Accept,
    /// Operator explicitly said no
    Decline,
    /// Prompt was dismissed without an answer
    Cancel,
}

/// A yes/no question put to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    /// Question text
    pub message: String,
    /// Answer used when the operator just presses enter
    pub default: bool,
    /// Label reported when the prompt is cancelled
    pub cancel_label: String,
}

impl ConfirmRequest {
    /// Label reported for a dismissed prompt.
    pub const CANCELLED: &'static str = "cancelled";

    /// The question asked before installing a builder package.
    pub fn install(package: &str) -> Self {
        ConfirmRequest {
            message: format!(
                "Nitro builder package `{}` is not installed. Would you like to install it?",
                package
            ),
            default: true,
            cancel_label: Self::CANCELLED.to_string(),
        }
    }
}

/// Capability to ask the operator a yes/no question.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, request: &ConfirmRequest) -> InstallDecision;
}

/// Capability to add a package as a development dependency.
pub trait DevDependencyInstaller: Send + Sync {
    /// Install `package` into the project at `cwd`, blocking until done.
    fn add_dev_dependency(&self, package: &str, cwd: &Path) -> Result<()>;
}

/// Ask to install `package` and run the installer if accepted.
///
/// Installer errors are returned as-is.
pub fn provision(
    package: &str,
    root: &Path,
    prompt: &dyn ConfirmPrompt,
    installer: &dyn DevDependencyInstaller,
) -> Result<()> {
    let request = ConfirmRequest::install(package);

    match prompt.confirm(&request) {
        InstallDecision::Accept => {
            tracing::info!(package, root = %root.display(), "installing builder package");
            installer.add_dev_dependency(package, root)
        }
        decision @ (InstallDecision::Decline | InstallDecision::Cancel) => {
            tracing::debug!(package, ?decision, "installation not accepted");
            Err(ResolveError::MissingDependency {
                package: package.to_string(),
            }
            .into())
        }
    }
}
