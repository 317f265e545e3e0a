//! User-facing status lines

use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::process::ExitCode;

use crate::error::KubeContextError;

/// Shown when the user backs out of a prompt
pub const CANCELLED: &str = "Alright then, keep your secrets! Exiting..";

/// Highlight a name inside a status line
pub fn highlight(value: &str) -> ColoredString {
    value.cyan()
}

/// Operation completed
pub fn success(message: impl Display) {
    println!("{} {}", "✔".green(), message);
}

/// Informational line
pub fn info(message: impl Display) {
    println!("ℹ {}", message);
}

/// Something worth noticing, not a failure
pub fn warning(message: impl Display) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Operation failed
pub fn failure(message: impl Display) {
    eprintln!("{} {}", "❌".red(), message);
}

/// How a command error is shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReport {
    /// The user stopped the command; not a failure of the tool
    Info(String),
    Failure(String),
}

pub fn describe_error(err: &KubeContextError) -> ErrorReport {
    if err.is_cancellation() {
        ErrorReport::Info(CANCELLED.to_string())
    } else {
        ErrorReport::Failure(err.to_string())
    }
}

/// Print a command error and return the exit code for it.
/// Cancellation and failures both exit 1.
pub fn report(err: &KubeContextError) -> ExitCode {
    match describe_error(err) {
        ErrorReport::Info(line) => info(line),
        ErrorReport::Failure(line) => failure(line),
    }
    ExitCode::FAILURE
}
