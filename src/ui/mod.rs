//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Terminal answers to the engine's questions

use crate::capability::{Confirm, Prompt};
use crate::error::{ReleaseError, Result};
use console::Term;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_result, display_status, display_success,
    display_version_fields, ordering_symbol, relationship_notes,
};

/// Asks questions on the controlling terminal.
///
/// Prompts are written to stderr so stdout carries only results.
#[derive(Debug, Clone)]
pub struct TerminalPrompt {
    term: Term,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt {
            term: Term::stderr(),
        }
    }

    fn read_answer(&self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        self.term.flush()?;
        Ok(self.term.read_line()?.trim().to_string())
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        TerminalPrompt::new()
    }
}

impl Confirm for TerminalPrompt {
    /// Accepts "y" or "yes" (case-insensitive); anything else, including Enter, is "no".
    fn ask(&self, prompt: &str) -> Result<bool> {
        let response = self.read_answer(&format!("\n{} (y/N): ", prompt))?;
        Ok(is_yes(&response))
    }
}

impl Prompt for TerminalPrompt {
    fn ask_int(&self, prompt: &str) -> Result<u32> {
        let response = self.read_answer(&format!("\n{} ", prompt))?;
        parse_number(&response)
    }
}

fn is_yes(response: &str) -> bool {
    let response = response.to_lowercase();
    response == "y" || response == "yes"
}

fn parse_number(response: &str) -> Result<u32> {
    response
        .parse::<u32>()
        .map_err(|_| ReleaseError::interaction(format!("'{}' is not a number", response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("24").unwrap(), 24);
        assert!(parse_number("").is_err());
        assert!(parse_number("-1").is_err());
        assert!(parse_number("twelve").is_err());
    }
}
