//! Interactive setup wizard for first-time configuration

use super::VitrineConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the inventory location
///
/// An empty answer leaves the inventory unset; `--inventory` must then be
/// passed on each run.
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<VitrineConfig, ConfigError> {
    println!("Welcome to vitrine! Let's point it at your inventory.\n");

    let location: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Inventory file or URL")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let columns: u16 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Cards per row")
        .default(3)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let location = location.trim();
    let config = VitrineConfig {
        inventory: (!location.is_empty()).then(|| location.to_string()),
        columns: columns.max(1),
        ..VitrineConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
