//! Test fixtures for driving sessions against a temporary task file.

use std::path::PathBuf;
use tempfile::TempDir;

use super::{scripted_console, transcript, ScriptedConsole};
use crate::error::Result;
use crate::session::Session;
use crate::storage::{TaskStore, DEFAULT_TASKS_FILE};
use crate::task::TaskList;

/// Build a list from literal task texts.
///
/// # Panics
///
/// Panics if any text is blank.
#[must_use]
pub fn list_of(texts: &[&str]) -> TaskList {
    let mut tasks = TaskList::new();
    for text in texts {
        tasks.add(text).expect("fixture task must not be blank");
    }
    tasks
}

/// A temporary directory holding the task file for one test.
///
/// Automatically cleans up when dropped.
pub struct TestFixture {
    temp_dir: TempDir,
    tasks_file: PathBuf,
}

impl TestFixture {
    /// Empty directory; the task file does not exist yet.
    ///
    /// # Panics
    ///
    /// Panics if temporary directory creation fails.
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let tasks_file = temp_dir.path().join(DEFAULT_TASKS_FILE);
        Self {
            temp_dir,
            tasks_file,
        }
    }

    /// Directory with a task file already saved.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_saved(texts: &[&str]) -> Self {
        let fixture = Self::new();
        fixture
            .store()
            .save(&list_of(texts))
            .expect("Failed to save fixture tasks");
        fixture
    }

    /// Task file inside a directory that does not exist, so saves fail.
    #[must_use]
    pub fn unwritable() -> Self {
        let mut fixture = Self::new();
        fixture.tasks_file = fixture
            .temp_dir
            .path()
            .join("missing")
            .join(DEFAULT_TASKS_FILE);
        fixture
    }

    /// A directory sits where the task file should be, so loads fail.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn directory_in_place() -> Self {
        let fixture = Self::new();
        std::fs::create_dir(&fixture.tasks_file).expect("Failed to create directory");
        fixture
    }

    #[must_use]
    pub fn store(&self) -> TaskStore {
        TaskStore::new(&self.tasks_file)
    }

    /// Overwrite the task file with arbitrary contents.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, contents: &str) {
        std::fs::write(&self.tasks_file, contents).expect("Failed to write task file");
    }

    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn read_raw(&self) -> String {
        std::fs::read_to_string(&self.tasks_file).expect("Failed to read task file")
    }

    /// Run a full session, startup prompt included, over scripted input.
    #[must_use]
    pub fn run(&self, input: impl AsRef<[u8]>) -> SessionRun {
        let mut session = self.session(input).build();
        let result = session.run();
        SessionRun::finish(session, result)
    }

    /// Start building a session that skips the startup prompt.
    #[must_use]
    pub fn session(&self, input: impl AsRef<[u8]>) -> SessionBuilder {
        SessionBuilder {
            console: scripted_console(input),
            store: self.store(),
            tasks: TaskList::new(),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Session under construction for a test.
pub struct SessionBuilder {
    console: ScriptedConsole,
    store: TaskStore,
    tasks: TaskList,
}

impl SessionBuilder {
    /// Seed the in-memory list.
    #[must_use]
    pub fn with_list(mut self, texts: &[&str]) -> Self {
        self.tasks = list_of(texts);
        self
    }

    #[must_use]
    pub fn build(self) -> Session<std::io::Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(self.console, self.store).with_tasks(self.tasks)
    }

    /// Step the menu loop until Exit or an error.
    #[must_use]
    pub fn run_loop(self) -> SessionRun {
        let mut session = self.build();
        let mut result = Ok(());
        while session.is_running() && result.is_ok() {
            result = session.step();
        }
        SessionRun::finish(session, result)
    }
}

/// Everything a test inspects after a session ends.
pub struct SessionRun {
    pub result: Result<()>,
    pub tasks: TaskList,
    pub output: String,
}

impl SessionRun {
    fn finish(session: Session<std::io::Cursor<Vec<u8>>, Vec<u8>>, result: Result<()>) -> Self {
        let tasks = session.tasks().clone();
        let output = transcript(session.into_console());
        Self {
            result,
            tasks,
            output,
        }
    }
}
