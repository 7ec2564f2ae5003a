//! Error types for the task list.
//!
//! Every failure a session can hit maps onto one variant here. The session
//! controller turns all of them except console I/O failures into a status
//! line and returns to the menu.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for task list operations
#[derive(Error, Debug)]
pub enum TaskError {
    // =========================================================================
    // Model Errors
    // =========================================================================
    /// Task text was empty or whitespace-only
    #[error("Task cannot be empty. Please enter a valid task.")]
    Validation,

    /// Task number outside `[1, len]`
    #[error("Invalid task number: {position} (tasks: {len})")]
    OutOfRange { position: usize, len: usize },

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// A menu choice or task number that is not an integer
    #[error("Not a number: '{input}'")]
    InputParse { input: String },

    // =========================================================================
    // Storage Errors
    // =========================================================================
    /// Persisted file exists but is not a JSON array of task strings
    #[error("Malformed task file {}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TaskError {
    /// Create a format error for the given file
    pub fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an input parse error
    pub fn input_parse(input: impl Into<String>) -> Self {
        Self::InputParse {
            input: input.into(),
        }
    }

    /// Check if this error ends the session.
    ///
    /// Only I/O failures are fatal, and the controller only lets them escape
    /// when they come from the console stream.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// The line shown to the user after the failing prompt.
    ///
    /// Storage errors keep their full description; the caller adds whether
    /// it was a load or a save that failed.
    pub fn user_message(&self) -> String {
        match self {
            Self::OutOfRange { .. } => "Invalid task number".to_string(),
            Self::InputParse { .. } => "Invalid input".to_string(),
            Self::Validation | Self::Format { .. } | Self::Io(_) => self.to_string(),
        }
    }
}

/// Type alias for task list results
pub type Result<T> = std::result::Result<T, TaskError>;
