//! Core data types shared by the resolver and the CLI.

pub mod builder;
pub mod options;

pub use builder::BuilderId;
pub use options::BuildOptions;
