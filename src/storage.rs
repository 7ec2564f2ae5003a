//! Flat-file persistence for the task list.
//!
//! The persisted form is a pretty-printed JSON array of strings with no
//! wrapper or version field. A missing file is not an error: it means there
//! is no prior session.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, TaskError};
use crate::task::TaskList;

/// Default task file name, relative to the working directory.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Temporary file suffix for atomic writes.
const TMP_SUFFIX: &str = ".tmp";

/// Result of a load that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file at the target path; nothing to restore.
    Absent,
    /// File parsed successfully.
    Loaded(TaskList),
}

impl LoadOutcome {
    /// Collapse into a task list, treating an absent file as empty.
    #[must_use]
    pub fn into_tasks(self) -> TaskList {
        match self {
            Self::Absent => TaskList::new(),
            Self::Loaded(tasks) => tasks,
        }
    }
}

/// Reads and writes the task list at a fixed path.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(DEFAULT_TASKS_FILE)
    }
}

impl TaskStore {
    /// Creates a store for the given file.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path to the task file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path to the temporary file used during saves.
    #[must_use]
    pub fn tmp_file_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(TMP_SUFFIX);
        PathBuf::from(name)
    }

    /// Overwrites the task file with `tasks`.
    ///
    /// The JSON is written to a sibling temporary file and renamed over the
    /// target, so a failed write never truncates the previous save.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] if the file cannot be written.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)
            .map_err(|e| TaskError::Io(std::io::Error::other(e)))?;

        let tmp_path = self.tmp_file_path();
        let written = File::create(&tmp_path).and_then(|mut tmp_file| {
            tmp_file.write_all(json.as_bytes())?;
            tmp_file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, &self.path)) {
            let _ = fs::remove_file(&tmp_path);
            warn!("Failed to save tasks to {}: {}", self.path.display(), e);
            return Err(e.into());
        }

        info!(count = tasks.len(), "Saved tasks to {}", self.path.display());
        Ok(())
    }

    /// Reads the task file.
    ///
    /// Order is preserved. Each entry is trimmed on the way in, the same
    /// normalization [`TaskList::add`] applies, so a file written by
    /// [`TaskStore::save`] loads back unchanged while a hand-edited
    /// `["  padded  "]` loads as `"padded"`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Format`] if the file is not a JSON array of
    /// non-empty strings, or [`TaskError::Io`] if it exists but cannot be
    /// read.
    pub fn load(&self) -> Result<LoadOutcome> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No task file at {}", self.path.display());
                return Ok(LoadOutcome::Absent);
            }
            Err(e) => return Err(e.into()),
        };

        let tasks: TaskList = serde_json::from_str(&contents).map_err(|e| {
            warn!("Malformed task file at {}: {}", self.path.display(), e);
            TaskError::format(&self.path, e.to_string())
        })?;

        info!(count = tasks.len(), "Loaded tasks from {}", self.path.display());
        Ok(LoadOutcome::Loaded(tasks))
    }

    /// Checks if the task file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
