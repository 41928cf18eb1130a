//! Output abstraction for one-shot commands
//!
//! Commands report through an [`OutputWriter`] so quiet mode and tests can
//! swap the sink without touching the command code.

use colored::Colorize;
use std::cell::RefCell;

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Trait for command output
///
/// # Examples
///
/// ```no_run
/// use vitrine::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.success("Inventory is valid");
/// output.error("items[0].price must be a number");
/// ```
pub trait OutputWriter {
    /// Write a message at the given level
    fn message(&self, level: MessageLevel, message: &str);

    fn write(&self, message: &str) {
        self.message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.message(MessageLevel::Info, message);
    }
}

/// Colored stdout/stderr writer
///
/// In quiet mode only normal output and errors are printed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl OutputWriter for StdoutWriter {
    fn message(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Normal => println!("{message}"),
            MessageLevel::Error => eprintln!("{} {}", "❌".red(), message),
            _ if self.quiet => {}
            MessageLevel::Success => println!("{} {}", "✓".green(), message),
            MessageLevel::Warning => println!("{} {}", "⚠️".yellow(), message),
            MessageLevel::Info => println!("{}", message.dimmed()),
        }
    }
}

/// Writer that keeps messages in memory
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything written so far
    pub fn take(&self) -> Vec<(MessageLevel, String)> {
        self.messages.take()
    }
}

impl OutputWriter for BufferWriter {
    fn message(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}
