//! Tasklist - interactive command-line task list
//!
//! Keeps an ordered list of free-text tasks in memory, lets the user add,
//! list, edit, and delete them from a numbered menu, and persists the list
//! to a JSON file between sessions.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`task`] - Task and ordered task list with positional access
//! - [`storage`] - JSON file persistence
//! - [`console`] - Prompt/response helpers and colored status lines
//! - [`menu`] - Menu whose options depend on the current list
//! - [`session`] - The interactive loop tying the pieces together
//! - [`config`] - Runtime options
//! - [`error`] - Error taxonomy
//! - [`testing`] - Scripted consoles for tests and benchmarks
//!
//! ```text
//! Console ──> Session ──> TaskList
//!                │
//!                └──> TaskStore (load on start, save on exit)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use tasklist::{Console, Session, TaskStore};
//!
//! let stdin = std::io::stdin();
//! let console = Console::new(stdin.lock(), std::io::stdout());
//! let mut session = Session::new(console, TaskStore::default());
//! session.run()?;
//! # Ok::<(), tasklist::TaskError>(())
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod session;
pub mod storage;
pub mod task;
pub mod testing;

// Re-export commonly used types
pub use config::Config;
pub use console::{Console, StatusKind};
pub use error::{Result, TaskError};
pub use menu::{Menu, MenuCommand};
pub use session::{Session, SessionState};
pub use storage::{LoadOutcome, TaskStore};
pub use task::{Task, TaskList};
