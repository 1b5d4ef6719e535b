//! Interactive confirmation prompts
//!
//! The safety gates ask the operator before proceeding in risky
//! situations. The prompt is a trait so tests can script answers without a
//! terminal.

use crate::error::{Error, Result};
use dialoguer::Input;

/// A source of interactive answers
pub trait Prompt {
    /// Ask `message` and return the operator's raw answer
    fn ask(&self, message: &str) -> Result<String>;
}

/// Prompt backed by the terminal
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&self, message: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}
