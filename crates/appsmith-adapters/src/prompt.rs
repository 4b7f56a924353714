//! User confirmation adapters.

use std::io::{self, Write};

use appsmith_core::application::{ApplicationError, ports::UserPrompt};
use appsmith_core::error::AppsmithResult;

/// Interactive stdin/stdout confirmation; default answer is yes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl UserPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> AppsmithResult<bool> {
        print!("{message} [Y/n] ");
        io::stdout().flush().map_err(|e| ApplicationError::PromptFailed {
            reason: format!("failed to flush stdout: {e}"),
        })?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| ApplicationError::PromptFailed {
                reason: format!("failed to read confirmation input: {e}"),
            })?;

        let input = input.trim().to_ascii_lowercase();
        Ok(input.is_empty() || input == "y" || input == "yes")
    }
}

/// Non-interactive prompt with a fixed answer (`--yes`, tests).
#[derive(Debug, Clone, Copy)]
pub struct StaticPrompt {
    answer: bool,
}

impl StaticPrompt {
    pub fn always_yes() -> Self {
        Self { answer: true }
    }

    pub fn always_no() -> Self {
        Self { answer: false }
    }
}

impl UserPrompt for StaticPrompt {
    fn confirm(&self, _message: &str) -> AppsmithResult<bool> {
        Ok(self.answer)
    }
}
