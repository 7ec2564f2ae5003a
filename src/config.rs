//! Runtime configuration for a session.

use std::path::PathBuf;

use crate::storage::DEFAULT_TASKS_FILE;

/// Options resolved from the command line and environment.
///
/// # Example
///
/// ```
/// use tasklist::config::Config;
///
/// let config = Config::default().with_color(false);
/// assert_eq!(config.tasks_file.to_str(), Some("tasks.json"));
/// assert!(!config.color);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the task list is loaded from and saved to.
    pub tasks_file: PathBuf,
    /// Whether status lines carry ANSI colors.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            color: true,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the task file path.
    #[must_use]
    pub fn with_tasks_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.tasks_file = path.into();
        self
    }

    /// Enable or disable colored output.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Turn colors off when `NO_COLOR` is set to a non-empty value.
    #[must_use]
    pub fn respect_no_color_env(self) -> Self {
        let disabled = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if disabled {
            self.with_color(false)
        } else {
            self
        }
    }
}
