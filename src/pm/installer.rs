//! Dev-dependency installation through the project's package manager.

use std::path::Path;

use anyhow::{bail, Result};

use crate::pm::{detect, PackageManager};
use crate::resolve::provision::DevDependencyInstaller;
use crate::util::process::{find_executable, ProcessBuilder};

/// Installer that shells out to npm, pnpm, yarn, bun or deno.
#[derive(Debug, Clone, Default)]
pub struct PackageManagerInstaller {
    preferred: Option<PackageManager>,
    stream_output: bool,
}

impl PackageManagerInstaller {
    /// Create an installer that detects the package manager per project.
    pub fn new() -> Self {
        PackageManagerInstaller::default()
    }

    /// Always use `pm`, skipping detection.
    pub fn with_package_manager(mut self, pm: Option<PackageManager>) -> Self {
        self.preferred = pm;
        self
    }

    /// Show the package manager's own output instead of capturing it.
    pub fn stream_output(mut self, stream: bool) -> Self {
        self.stream_output = stream;
        self
    }

    /// Package manager that will be used for the project at `cwd`.
    pub fn package_manager_for(&self, cwd: &Path) -> PackageManager {
        self.preferred.unwrap_or_else(|| detect(cwd))
    }

    /// The command that would install `package` into `cwd`.
    pub fn command_for(&self, package: &str, cwd: &Path) -> ProcessBuilder {
        let pm = self.package_manager_for(cwd);
        let program = find_executable(pm.command())
            .unwrap_or_else(|| pm.command().into());

        ProcessBuilder::new(program)
            .args(pm.add_dev_args(package, cwd))
            .cwd(cwd)
            .inherit_output(self.stream_output)
    }
}

impl DevDependencyInstaller for PackageManagerInstaller {
    fn add_dev_dependency(&self, package: &str, cwd: &Path) -> Result<()> {
        let pm = self.package_manager_for(cwd);
        if find_executable(pm.command()).is_none() {
            bail!(
                "package manager `{}` not found on PATH; install `{}` manually",
                pm,
                package
            );
        }

        let cmd = self.command_for(package, cwd);
        tracing::info!("running `{}` in {}", cmd.display_command(), cwd.display());
        cmd.exec_and_check()?;

        Ok(())
    }
}
