//! Resolution error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::builder::{join_ids, BuilderId};
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Fatal outcome of a builder resolution.
///
/// Detection heuristics never produce these; only explicit choices do.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ResolveError {
    #[error(
        "Invalid nitro builder \"{name}\". Valid builders are: {}.",
        join_ids(.supported)
    )]
    #[diagnostic(
        code(nitro_builder::resolve::invalid_builder),
        help("Set `builder` to a supported name, or leave it unset to auto-detect")
    )]
    InvalidBuilder {
        name: String,
        supported: Vec<BuilderId>,
    },

    #[error(
        "Nitro builder package \"{package}\" is not installed. Please install it in your project dependencies."
    )]
    #[diagnostic(
        code(nitro_builder::resolve::missing_dependency),
        help("Add the package as a dev dependency and run the resolver again")
    )]
    MissingDependency { package: String },
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::InvalidBuilder { supported, .. } => {
                Diagnostic::error(self.to_string())
                    .with_context(format!("supported: {}", join_ids(supported)))
                    .with_suggestion(suggestions::LIST_BUILDERS)
                    .with_suggestion("Remove the `builder` setting to auto-detect")
            }

            ResolveError::MissingDependency { package } => {
                Diagnostic::error(self.to_string())
                    .with_context("installation was declined or cancelled")
                    .with_suggestion(format!(
                        "Install it manually, e.g. `npm install -D {}`",
                        package
                    ))
                    .with_suggestion(suggestions::ACCEPT_INSTALL)
            }
        }
    }
}
