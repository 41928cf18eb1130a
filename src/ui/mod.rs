//! Presentation layer
//!
//! The sync loop only talks to a [`Presenter`]; what it draws on is an
//! implementation detail of the adapter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      sync::Session                      │
//! │   (controls, location, debounce)        │
//! └────────────────┬────────────────────────┘
//!                  │ render / show_error / show_details
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      Presenter trait                    │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ GridPresenter │  │ TuiPresenter      │
//! │ (stdout)      │  │ (ratatui browser) │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! One-shot commands report status through [`OutputWriter`].

pub mod error;
pub mod format;
pub mod grid;
pub mod output;
pub mod ratatui_adapter;
pub mod traits;

pub use error::{Result, UiError};
pub use format::format_price;
pub use grid::GridPresenter;
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use traits::Presenter;
