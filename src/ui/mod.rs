//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners,
//! interactive prompts and status messages.

pub mod message;
mod prompt;
mod spinner;

pub use prompt::{Prompter, TerminalPrompter};
pub use spinner::{clear_spinner, create_spinner, update_spinner};

#[cfg(test)]
pub(crate) use prompt::testing;
