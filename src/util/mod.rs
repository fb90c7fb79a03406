//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod process;
pub mod prompt;
pub mod shell;

pub use config::Config;
pub use diagnostic::Diagnostic;
pub use prompt::{AutoConfirm, TerminalPrompt};
pub use shell::{ColorChoice, Shell, Status};
