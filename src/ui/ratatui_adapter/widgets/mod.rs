//! Ratatui widgets for the catalog browser

mod card_grid;
mod details_modal;
mod filter_panel;
mod help_bar;
mod status_bar;

pub use card_grid::{CARD_HEIGHT, CardGrid};
pub use details_modal::DetailsModal;
pub use filter_panel::FilterPanel;
pub use help_bar::{HelpBar, KeyHint, hints_for};
pub use status_bar::StatusBar;
