//! Browse command - interactive catalog browser

use crate::{
    VitrineError,
    config::VitrineConfig,
    inventory::{CacheMode, Loader, Source},
    ui::{OutputWriter, ratatui_adapter::BrowseApp},
};

type Result<T> = std::result::Result<T, VitrineError>;

/// Execute the browse command
///
/// Prints the final share string after the browser closes so the view can be
/// reopened with `--state`.
///
/// # Errors
/// Returns an error if the terminal cannot be driven.
pub fn execute(
    location: &str,
    state: Option<&str>,
    config: &VitrineConfig,
    out: &dyn OutputWriter,
) -> Result<String> {
    let loader = Loader::new(Source::parse(location, CacheMode::NoStore));
    let app = BrowseApp::new()
        .with_columns(config.columns)
        .with_options(config.session_options());

    let share = app.run(loader, state.unwrap_or_default())?;

    if share.is_empty() {
        out.info("No filters applied.");
    } else {
        out.info("Reopen this view with:");
        out.write(&format!("vitrine browse --state '{share}'"));
    }
    Ok(share)
}
