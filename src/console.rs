//! Line-oriented console helpers.
//!
//! [`Console`] wraps any buffered reader and writer so the session can run
//! against stdin/stdout in the binary and against in-memory buffers in
//! tests.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::error::{Result, TaskError};

/// Visual tag for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Warning,
    Info,
    /// One entry of a listing.
    Item,
    Neutral,
}

impl StatusKind {
    fn paint(self, text: &str) -> String {
        match self {
            StatusKind::Success => text.green().to_string(),
            StatusKind::Error => text.red().to_string(),
            StatusKind::Warning => text.yellow().to_string(),
            StatusKind::Info => text.blue().to_string(),
            StatusKind::Item => text.cyan().to_string(),
            StatusKind::Neutral => text.to_string(),
        }
    }
}

/// Prompt/response console over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with colored output.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write `text` without a newline, read one line, and return it trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] if the stream fails or reaches end of input.
    /// Both are unrecoverable for an interactive session. Bytes that are not
    /// valid UTF-8 are replaced, not rejected.
    pub fn prompt_line(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        let read = self.input.read_until(b'\n', &mut line)?;
        if read == 0 {
            return Err(TaskError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "console input closed",
            )));
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Ask until the answer is `yes` or `no` (trimmed, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] on console failure.
    pub fn prompt_yes_no(&mut self, text: &str) -> Result<bool> {
        loop {
            match self.prompt_line(text)?.to_lowercase().as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => self.print_status(
                    StatusKind::Error,
                    "Invalid choice. Please enter 'yes' or 'no'.",
                )?,
            }
        }
    }

    /// Ask once; anything other than `yes` counts as no.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] on console failure.
    pub fn confirm(&mut self, text: &str) -> Result<bool> {
        Ok(self.prompt_line(text)?.eq_ignore_ascii_case("yes"))
    }

    /// Prompt for an integer.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InputParse`] for non-numeric input and
    /// [`TaskError::Io`] on console failure.
    pub fn prompt_number(&mut self, text: &str) -> Result<i64> {
        let line = self.prompt_line(text)?;
        line.parse().map_err(|_| TaskError::input_parse(line))
    }

    /// Write a tagged status line.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] on console failure.
    pub fn print_status(&mut self, kind: StatusKind, text: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", kind.paint(text))?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        Ok(())
    }

    /// Write a highlighted section heading.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] on console failure.
    pub fn print_heading(&mut self, text: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.black().on_cyan())?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        Ok(())
    }

    /// Write a plain line.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] on console failure.
    pub fn println(&mut self, text: &str) -> Result<()> {
        self.print_status(StatusKind::Neutral, text)
    }

    /// Split the console back into its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
