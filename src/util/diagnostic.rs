//! User-friendly error diagnostics.
//!
//! Every error shown to the operator carries the root cause, the context
//! that led to it, and suggested fixes.

use std::fmt;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a builder name is not recognized.
    pub const LIST_BUILDERS: &str = "Run `nitro-builder list` to see supported builders";

    /// Suggestion when installation was declined.
    pub const ACCEPT_INSTALL: &str =
        "Re-run with `--yes` to install missing builder packages automatically";
}

/// An error message with context lines and suggested fixes.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Render for the terminal, with ANSI colors when `color` is set.
    pub fn format(&self, color: bool) -> String {
        let (error, help) = if color {
            ("\x1b[1;31merror\x1b[0m", "\x1b[1;32mhelp\x1b[0m")
        } else {
            ("error", "help")
        };

        let mut output = format!("{}: {}\n", error, self.message);
        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push_str(&format!("\n{}: consider:\n", help));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("builder package `vite` is not installed")
            .with_context("installation was declined")
            .with_suggestion("Install it manually, e.g. `pnpm add -D vite`")
            .with_suggestion("Re-run with `--yes`");

        let output = diag.to_string();
        assert!(output.starts_with("error: builder package `vite` is not installed\n"));
        assert!(output.contains("  = installation was declined"));
        assert!(output.contains("\nhelp: consider:\n"));
        assert!(output.contains("1. Install it manually"));
        assert!(output.contains("2. Re-run with `--yes`"));
    }

    #[test]
    fn test_colored_output() {
        let output = Diagnostic::error("boom").with_suggestion("retry").format(true);
        assert!(output.starts_with("\x1b[1;31merror\x1b[0m: boom"));
        assert!(output.contains("\x1b[1;32mhelp\x1b[0m: consider:"));
    }

    #[test]
    fn test_bare_error() {
        assert_eq!(Diagnostic::error("boom").to_string(), "error: boom\n");
    }
}
