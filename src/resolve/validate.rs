//! Explicit-choice validation.

use crate::core::builder::BuilderId;
use crate::resolve::errors::ResolveError;

/// Check that an explicitly requested name is a supported builder.
pub fn validate(name: &str) -> Result<BuilderId, ResolveError> {
    let id = name.parse::<BuilderId>()?;
    tracing::debug!(builder = %id, "explicit builder is supported");
    Ok(id)
}

/// Whether the availability probe has to run before `id` is usable.
pub fn requires_probe(id: BuilderId) -> bool {
    !id.is_bundled()
}
