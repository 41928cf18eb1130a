//! Ratatui-based catalog browser
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           BrowseApp (event loop)            │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Session   │ │  Ratatui  │ │ Crossterm │
//! │ (sync loop)│ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! The session renders into a [`TuiPresenter`]; each frame is drawn from the
//! presenter's last result plus the form controls, so redraws never rerun
//! the filter.
//!
//! # Features
//!
//! - **Filter panel** with debounced text fields and immediate toggles
//! - **Card grid** with keyboard navigation
//! - **Details modal** with an image link
//! - **Status bar** showing the live share string and errors

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{BrowseApp, copy_to_clipboard, open_external};
pub use events::{BrowseSession, EventResult, handle_key};
pub use state::{BrowseState, Focus, StatusMessage, TuiPresenter};
pub use theme::Theme;
