//! Operator prompts.

use std::io::{self, IsTerminal};

use dialoguer::Confirm;

use crate::resolve::provision::{ConfirmPrompt, ConfirmRequest, InstallDecision};

/// Interactive yes/no prompt on the controlling terminal.
///
/// Esc or `q` dismisses the prompt. Without a terminal on stdin and stderr
/// every question is treated as dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt
    }

    fn is_interactive() -> bool {
        io::stdin().is_terminal() && io::stderr().is_terminal()
    }
}

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, request: &ConfirmRequest) -> InstallDecision {
        if !Self::is_interactive() {
            tracing::debug!(label = %request.cancel_label, "no terminal; prompt dismissed");
            return InstallDecision::Cancel;
        }

        let answer = Confirm::new()
            .with_prompt(&request.message)
            .default(request.default)
            .interact_opt();

        match answer {
            Ok(Some(true)) => InstallDecision::Accept,
            Ok(Some(false)) => InstallDecision::Decline,
            Ok(None) => {
                tracing::debug!(label = %request.cancel_label, "prompt dismissed");
                InstallDecision::Cancel
            }
            Err(e) => {
                tracing::warn!("prompt failed: {}", e);
                InstallDecision::Cancel
            }
        }
    }
}

/// Prompt that answers every question the same way (`--yes`).
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub InstallDecision);

impl AutoConfirm {
    pub fn accept() -> Self {
        AutoConfirm(InstallDecision::Accept)
    }
}

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, request: &ConfirmRequest) -> InstallDecision {
        tracing::debug!(message = %request.message, decision = ?self.0, "answered without prompting");
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_confirm() {
        let request = ConfirmRequest::install("vite");
        assert_eq!(AutoConfirm::accept().confirm(&request), InstallDecision::Accept);
        assert_eq!(
            AutoConfirm(InstallDecision::Decline).confirm(&request),
            InstallDecision::Decline
        );
    }

    #[test]
    fn test_terminal_prompt_without_tty_cancels() {
        // cargo test runs with captured stdio, so there is no terminal here
        if TerminalPrompt::is_interactive() {
            return;
        }
        let request = ConfirmRequest::install("rollup");
        assert_eq!(TerminalPrompt::new().confirm(&request), InstallDecision::Cancel);
    }
}
