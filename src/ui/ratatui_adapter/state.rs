//! State for the interactive browser
//!
//! [`TuiPresenter`] is what the session renders into; [`BrowseState`] holds
//! everything that only matters to the terminal (focus, cursors, messages).

use crate::inventory::{ErrorSink, InventoryItem};
use crate::sync::ControlField;
use crate::ui::output::MessageLevel;
use crate::ui::traits::Presenter;
use std::time::{Duration, Instant};

/// A status message with timestamp for auto-expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Presenter backing the TUI
///
/// Keeps owned copies of the last rendered cards so the frame can be redrawn
/// between runs.
#[derive(Debug, Default)]
pub struct TuiPresenter {
    cards: Vec<InventoryItem>,
    details: Option<InventoryItem>,
    error: Option<String>,
    renders: usize,
}

impl TuiPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards from the most recent run, in display order
    #[must_use]
    pub fn cards(&self) -> &[InventoryItem] {
        &self.cards
    }

    /// Item shown in the details modal, if open
    #[must_use]
    pub const fn details(&self) -> Option<&InventoryItem> {
        self.details.as_ref()
    }

    pub fn close_details(&mut self) -> Option<InventoryItem> {
        self.details.take()
    }

    /// Persistent error banner text
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Number of runs rendered so far
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.renders
    }
}

impl ErrorSink for TuiPresenter {
    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

impl Presenter for TuiPresenter {
    fn render(&mut self, items: &[&InventoryItem]) {
        self.cards = items.iter().map(|item| (*item).clone()).collect();
        self.renders += 1;
    }

    fn show_details(&mut self, item: &InventoryItem) {
        self.details = Some(item.clone());
    }
}

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Control(ControlField),
    Grid,
}

impl Focus {
    /// Next focus target (controls in order, then the grid)
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Control(ControlField::Sort) => Self::Grid,
            Self::Control(field) => Self::Control(field.next()),
            Self::Grid => Self::Control(ControlField::Query),
        }
    }

    /// Previous focus target
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Control(ControlField::Query) => Self::Grid,
            Self::Control(field) => Self::Control(field.prev()),
            Self::Grid => Self::Control(ControlField::Sort),
        }
    }
}

/// Terminal-only browser state
#[derive(Debug)]
pub struct BrowseState {
    pub focus: Focus,
    /// Index of the highlighted card
    pub grid_cursor: usize,
    /// Index of the highlighted category option
    pub category_cursor: usize,
    /// Cards per grid row
    pub columns: usize,
    /// Id of the card that opened the details modal
    pub opened_from: Option<String>,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    pub should_exit: bool,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(3)
    }
}

impl BrowseState {
    #[must_use]
    pub fn new(columns: u16) -> Self {
        Self {
            focus: Focus::Control(ControlField::Query),
            grid_cursor: 0,
            category_cursor: 0,
            columns: usize::from(columns.max(1)),
            opened_from: None,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        }
    }

    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// Keep the grid cursor inside a result set of `len` cards
    pub fn clamp_grid(&mut self, len: usize) {
        self.grid_cursor = self.grid_cursor.min(len.saturating_sub(1));
    }

    pub fn clamp_categories(&mut self, len: usize) {
        self.category_cursor = self.category_cursor.min(len.saturating_sub(1));
    }

    /// Move the grid cursor by `delta` cards, staying in bounds
    pub fn move_grid(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.grid_cursor = 0;
            return;
        }
        let target = self.grid_cursor.saturating_add_signed(delta);
        self.grid_cursor = target.min(len - 1);
    }

    /// Grid row of the cursor
    #[must_use]
    pub const fn cursor_row(&self) -> usize {
        self.grid_cursor / self.columns
    }
}
