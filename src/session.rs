//! Interactive session controller.
//!
//! A session owns the task list, the store it persists to, and the console
//! it talks through. Each [`Session::step`] renders the menu, reads one
//! choice, and dispatches it. Errors from a single operation become a
//! status line and the loop carries on; only console failures end the
//! session early.
//!
//! ```text
//! start ──> [Running] ──step──> [Running] ── Exit ──> [Stopped]
//!   │                              ^    │
//!   └─ load prompt                 └────┘ Add / List / Edit / Delete / invalid
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::console::{Console, StatusKind};
use crate::error::{Result, TaskError};
use crate::menu::{Menu, MenuCommand};
use crate::storage::{LoadOutcome, TaskStore};
use crate::task::TaskList;

const BANNER: &str = "### Welcome to the Task List ###";
const LOAD_PROMPT: &str = "Do you want to load tasks from the last session? (yes/no): ";
const SAVE_PROMPT: &str = "Do you want to save tasks before exiting? (yes/no): ";
const CHOICE_PROMPT: &str = "Enter your choice: ";
const NEW_TASK_PROMPT: &str = "Enter the new task: ";
const TASK_NUMBER_PROMPT: &str = "Enter the task number: ";
const FAREWELL: &str = "Exiting... Have a great day!";
const SEPARATOR_WIDTH: usize = 40;

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// One run of the interactive loop, from the load prompt to Exit.
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    store: TaskStore,
    tasks: TaskList,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty list.
    pub fn new(console: Console<R, W>, store: TaskStore) -> Self {
        Self {
            console,
            store,
            tasks: TaskList::new(),
            state: SessionState::Running,
        }
    }

    /// Start from an existing list instead of an empty one.
    #[must_use]
    pub fn with_tasks(mut self, tasks: TaskList) -> Self {
        self.tasks = tasks;
        self
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Give back the console, e.g. to inspect a test transcript.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run the whole session: startup prompt, then the menu loop until Exit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] if the console fails or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!(file = %self.store.path().display(), "Session started");
        self.start()?;
        while self.is_running() {
            self.step()?;
        }
        info!("Session ended");
        Ok(())
    }

    /// Print the banner and ask whether to restore the last session.
    ///
    /// A missing file starts empty with a warning. A malformed file is
    /// reported and also starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] on console failure.
    pub fn start(&mut self) -> Result<()> {
        self.console.println(BANNER)?;

        if !self.console.prompt_yes_no(LOAD_PROMPT)? {
            return self
                .console
                .print_status(StatusKind::Warning, "Starting with a fresh task list.");
        }

        match self.store.load() {
            Ok(LoadOutcome::Loaded(tasks)) => {
                self.tasks = tasks;
                let message = format!(
                    "Tasks loaded successfully from {}",
                    self.store.path().display()
                );
                self.console.print_status(StatusKind::Success, &message)
            }
            Ok(LoadOutcome::Absent) => self.console.print_status(
                StatusKind::Warning,
                "No previous tasks found. Starting fresh!",
            ),
            Err(e) => self
                .console
                .print_status(StatusKind::Error, &format!("Error loading tasks: {e}")),
        }
    }

    /// One menu iteration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] on console failure.
    pub fn step(&mut self) -> Result<()> {
        let menu = Menu::for_list(!self.tasks.is_empty());
        self.console.println(Menu::HEADER)?;
        for line in menu.lines() {
            self.console.println(&line)?;
        }

        let choice = match self.console.prompt_number(CHOICE_PROMPT) {
            Ok(choice) => choice,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                debug!("Rejected menu choice: {}", e);
                return self
                    .console
                    .print_status(StatusKind::Error, &e.user_message());
            }
        };

        let separator = "-".repeat(SEPARATOR_WIDTH);
        self.console.println(&separator)?;
        match menu.select(choice) {
            Some(command) => self.dispatch(command)?,
            None => {
                debug!(choice, "No menu entry for choice");
                self.console.print_status(StatusKind::Error, "Invalid input")?;
            }
        }
        self.console.println(&separator)
    }

    fn dispatch(&mut self, command: MenuCommand) -> Result<()> {
        debug!(?command, "Dispatching");
        match command {
            MenuCommand::Add => self.add_task(),
            MenuCommand::List => self.list_tasks(),
            MenuCommand::Edit => self.edit_task(),
            MenuCommand::Delete => self.delete_task(),
            MenuCommand::Exit => self.exit(),
        }
    }

    fn add_task(&mut self) -> Result<()> {
        let text = self.console.prompt_line(NEW_TASK_PROMPT)?;
        match self.tasks.add(&text) {
            Ok(_) => self
                .console
                .print_status(StatusKind::Success, &format!("Task added: {}", text.trim())),
            Err(e) => self.report(&e),
        }
    }

    fn list_tasks(&mut self) -> Result<()> {
        if self.tasks.is_empty() {
            return self
                .console
                .print_status(StatusKind::Error, "No tasks found. Try adding tasks first");
        }
        self.console.print_heading("Task List")?;
        for line in self.tasks.list() {
            self.console.print_status(StatusKind::Item, &line)?;
        }
        Ok(())
    }

    fn edit_task(&mut self) -> Result<()> {
        let Some(position) = self.read_position()? else {
            return Ok(());
        };
        let text = self.console.prompt_line(NEW_TASK_PROMPT)?;
        match self.tasks.update(position, &text) {
            Ok(old) => {
                self.console
                    .print_status(StatusKind::Warning, &format!("Old task: {old}"))?;
                self.console
                    .print_status(StatusKind::Success, &format!("New task: {}", text.trim()))
            }
            Err(e) => self.report(&e),
        }
    }

    fn delete_task(&mut self) -> Result<()> {
        let Some(position) = self.read_position()? else {
            return Ok(());
        };
        match self.tasks.remove(position) {
            Ok(task) => self
                .console
                .print_status(StatusKind::Success, &format!("Task deleted: {task}")),
            Err(e) => self.report(&e),
        }
    }

    /// Show the task count and read a position that is currently in range.
    fn read_position(&mut self) -> Result<Option<usize>> {
        self.console
            .println(&format!("Total tasks: {}", self.tasks.len()))?;

        let number = match self.console.prompt_number(TASK_NUMBER_PROMPT) {
            Ok(number) => number,
            Err(e) if e.is_fatal() => return Err(e),
            Err(_) => {
                self.console
                    .print_status(StatusKind::Error, "Input a valid task number")?;
                return Ok(None);
            }
        };

        // Negative numbers fall through to the range check as position 0.
        let position = usize::try_from(number).unwrap_or(0);
        if let Err(e) = self.tasks.get(position).map(|_| ()) {
            self.report(&e)?;
            return Ok(None);
        }
        Ok(Some(position))
    }

    fn exit(&mut self) -> Result<()> {
        if !self.tasks.is_empty() && self.console.confirm(SAVE_PROMPT)? {
            match self.store.save(&self.tasks) {
                Ok(()) => {
                    let message = format!(
                        "Tasks saved successfully to {}",
                        self.store.path().display()
                    );
                    self.console.print_status(StatusKind::Success, &message)?;
                }
                Err(e) => self
                    .console
                    .print_status(StatusKind::Error, &format!("Failed to write file: {e}"))?,
            }
        }
        self.console.print_status(StatusKind::Info, FAREWELL)?;
        self.state = SessionState::Stopped;
        Ok(())
    }

    fn report(&mut self, error: &TaskError) -> Result<()> {
        debug!("Operation rejected: {}", error);
        self.console
            .print_status(StatusKind::Error, &error.user_message())
    }
}
