//! Command implementations

pub mod check;
pub mod completions;
pub mod detect;
pub mod list;
pub mod resolve;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::ProjectArgs;

impl ProjectArgs {
    /// The project root, defaulting to the current directory.
    pub fn root_dir(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().context("failed to determine current directory"),
        }
    }
}
