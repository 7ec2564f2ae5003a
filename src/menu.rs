//! Dynamic main menu.
//!
//! The menu is rebuilt every iteration from the current list state, and a
//! numeric choice selects whatever command sits at that position. Edit and
//! Delete only exist while the list has tasks, so Exit moves between 3 and
//! 5. On an empty list, choice 3 is Exit while 4 and 5 are invalid.

use std::fmt;

/// A command offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    List,
    Edit,
    Delete,
    Exit,
}

impl MenuCommand {
    /// Menu label for this command.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Add => "Add a new task",
            MenuCommand::List => "List all tasks",
            MenuCommand::Edit => "Edit a task",
            MenuCommand::Delete => "Delete a task",
            MenuCommand::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered set of commands available this iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    commands: Vec<MenuCommand>,
}

impl Menu {
    /// Header printed above the options.
    pub const HEADER: &'static str = "# Operations to perform:";

    /// Build the menu for a list with or without tasks.
    #[must_use]
    pub fn for_list(has_tasks: bool) -> Self {
        let mut commands = vec![MenuCommand::Add, MenuCommand::List];
        if has_tasks {
            commands.extend([MenuCommand::Edit, MenuCommand::Delete]);
        }
        commands.push(MenuCommand::Exit);
        Self { commands }
    }

    /// Command at a 1-based choice, or `None` if nothing is listed there.
    #[must_use]
    pub fn select(&self, choice: i64) -> Option<MenuCommand> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        self.commands.get(index).copied()
    }

    /// Numbered option lines, e.g. `"1. Add a new task"`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.commands
            .iter()
            .enumerate()
            .map(|(i, command)| format!("{}. {}", i + 1, command))
            .collect()
    }

    #[must_use]
    pub fn commands(&self) -> &[MenuCommand] {
        &self.commands
    }
}
