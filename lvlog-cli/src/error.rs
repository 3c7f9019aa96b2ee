//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// Failed to open the requested log file
    OutputOpen { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an error message and status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::OutputOpen { path, error } => {
                write!(f, "Failed to open log file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::OutputOpen { error, .. } => Some(error),
        }
    }
}
