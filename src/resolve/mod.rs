//! Builder resolution.
//!
//! Decides which bundler Nitro drives for a project and makes sure it is
//! installed.
//!
//! ```text
//!  requested? ──no──► detect ─────────────────────────────► resolved
//!      │
//!     yes
//!      ▼
//!  validate ──bad──► InvalidBuilder
//!      │
//!  bundled? ──yes──────────────────────────────────────────► resolved
//!      │
//!    probe ──found─────────────────────────────────────────► resolved
//!      │
//!    prompt ──accept──► install ───────────────────────────► resolved
//!      │
//!  decline/cancel ──► MissingDependency
//! ```
//!
//! All collaborators (package probe, prompt, installer) are injected, and
//! the environment override is passed in by the caller, so a `Resolver` has
//! no hidden inputs and can be shared across threads.

pub mod context;
pub mod detect;
pub mod errors;
pub mod probe;
pub mod provision;
pub mod validate;

use anyhow::Result;

use crate::core::builder::BuilderId;
use crate::core::options::BuildOptions;

pub use context::{EnvSnapshot, ResolutionContext, BUILDER_ENV_VAR};
pub use detect::Detection;
pub use errors::ResolveError;
pub use probe::{NodeModulesProbe, PackageProbe};
pub use provision::{ConfirmPrompt, ConfirmRequest, DevDependencyInstaller, InstallDecision};

/// Resolves the builder for a project using injected collaborators.
pub struct Resolver<'a> {
    probe: &'a dyn PackageProbe,
    prompt: &'a dyn ConfirmPrompt,
    installer: &'a dyn DevDependencyInstaller,
}

impl<'a> Resolver<'a> {
    pub fn new(
        probe: &'a dyn PackageProbe,
        prompt: &'a dyn ConfirmPrompt,
        installer: &'a dyn DevDependencyInstaller,
    ) -> Self {
        Resolver {
            probe,
            prompt,
            installer,
        }
    }

    /// Resolve the builder for `options` and write it back.
    ///
    /// `env_override` is the snapshotted `NITRO_BUILDER` value; it only
    /// applies when `options.builder` is unset. On error `options` is left
    /// unchanged.
    pub fn resolve(&self, options: &mut BuildOptions, env_override: Option<&str>) -> Result<BuilderId> {
        let mut ctx = ResolutionContext::new(options, env_override);
        let id = self.resolve_context(&mut ctx)?;
        options.builder = Some(id.as_str().to_string());
        Ok(id)
    }

    /// Run the resolution state machine over a prepared context.
    pub fn resolve_context(&self, ctx: &mut ResolutionContext) -> Result<BuilderId> {
        let id = match ctx.requested() {
            Some(name) => {
                let id = validate::validate(name)?;
                if validate::requires_probe(id) {
                    self.ensure_available(id, ctx)?;
                }
                id
            }
            None => detect::inspect(ctx.root(), self.probe).builder,
        };

        tracing::debug!(builder = %id, root = %ctx.root().display(), "builder resolved");
        ctx.set_resolved(id);
        Ok(id)
    }

    fn ensure_available(&self, id: BuilderId, ctx: &ResolutionContext) -> Result<()> {
        let package = id.package_name();
        if self.probe.is_resolvable(package, ctx.root()) {
            return Ok(());
        }

        provision::provision(package, ctx.root(), self.prompt, self.installer)
    }
}
