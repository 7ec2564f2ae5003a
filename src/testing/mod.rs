//! Testing infrastructure for the task list.
//!
//! Sessions are generic over their reader and writer, so tests and
//! benchmarks drive them with a scripted in-memory console instead of a
//! terminal.
//!
//! # Example
//!
//! ```
//! use tasklist::storage::TaskStore;
//! use tasklist::testing::{scripted_console, transcript};
//! use tasklist::Session;
//!
//! let console = scripted_console("no\n1\nbuy milk\n2\n5\nno\n");
//! let mut session = Session::new(console, TaskStore::new("unused.json"));
//! session.run().unwrap();
//!
//! assert_eq!(session.tasks().len(), 1);
//! assert!(transcript(session.into_console()).contains("1: buy milk"));
//! ```

#[cfg(test)]
pub mod fixtures;

use std::io::Cursor;

use crate::console::Console;

/// Console reading from a fixed script and writing into memory.
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Console that answers prompts from `input`, without colors.
#[must_use]
pub fn scripted_console(input: impl AsRef<[u8]>) -> ScriptedConsole {
    Console::new(Cursor::new(input.as_ref().to_vec()), Vec::new()).with_color(false)
}

/// Everything written to a scripted console.
#[must_use]
pub fn transcript(console: ScriptedConsole) -> String {
    String::from_utf8_lossy(&console.into_parts().1).into_owned()
}
