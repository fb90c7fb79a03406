//! nitro-builder - Builder selection and provisioning for Nitro projects
//!
//! Decides which bundler (rolldown, rollup or vite) builds a Nitro
//! application, validates explicit choices, auto-detects the vite
//! integration, and offers to install builder packages that are missing.

pub mod core;
pub mod pm;
pub mod resolve;
pub mod util;

/// Test utilities and mocks for unit tests.
///
/// Recording implementations of the probe, prompt and installer
/// capabilities, plus on-disk project fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{BuildOptions, BuilderId};
pub use resolve::{ResolveError, Resolver};
