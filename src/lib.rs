//! Vitrine - a terminal catalog browser
//!
//! This library loads a static product inventory, filters and sorts it from a
//! normalized filter state, and keeps that state in a shareable query string.
//! Rendering sits behind the [`ui::Presenter`] trait so the engine and codec
//! can be exercised without a terminal.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod filters;
pub mod inventory;
pub mod sync;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum VitrineError {
    /// Inventory could not be loaded or validated
    #[error("Inventory error: {0}")]
    Load(#[from] inventory::LoadError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error while writing output
    #[error("Output error: {0}")]
    Output(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for VitrineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<csv::Error> for VitrineError {
    fn from(err: csv::Error) -> Self {
        Self::Output(err.to_string())
    }
}
