//! Search command - one-shot filter over the inventory

use super::export;
use crate::{
    VitrineError,
    config::OutputFormat,
    filters::{FilterState, codec, engine},
    inventory::{InventorySource, Loader},
    sync::{MemoryLocation, Session, SessionOptions},
    ui::{GridPresenter, OutputWriter},
};
use std::io::Write;

type Result<T> = std::result::Result<T, VitrineError>;

/// Execute the search command
///
/// Text output goes through a browsing session: a failed load is reported
/// as an error banner followed by the empty state. JSON and CSV output are
/// for scripts, so load failures are returned instead.
///
/// Returns the number of matching items.
///
/// # Errors
/// Returns an error on load failures (JSON/CSV) or output failures.
pub fn execute<S: InventorySource, W: Write, E: Write>(
    loader: Loader<S>,
    state: &FilterState,
    format: OutputFormat,
    presenter: GridPresenter<W, E>,
    out: &dyn OutputWriter,
) -> Result<usize> {
    let query = codec::encode(state);

    match format {
        OutputFormat::Text => {
            let mut presenter = presenter;
            let inventory = loader.load(&mut presenter);
            presenter.set_total(inventory.len());
            let session = Session::with_inventory(
                inventory,
                presenter,
                MemoryLocation::new(query),
                SessionOptions::default(),
            );
            let count = session.visible();
            let share = session.location().share_string();
            let (mut presenter, _) = session.into_parts();
            if let Some(e) = presenter.take_io_error() {
                return Err(e.into());
            }
            if !share.is_empty() {
                out.info(&format!("\nShare: {share}"));
            }
            Ok(count)
        }
        OutputFormat::Json | OutputFormat::Csv => {
            let inventory = loader.try_load()?;
            let view = engine::apply(&inventory.items, state);
            let (writer, _) = presenter.into_writers();
            if format == OutputFormat::Json {
                export::write_json(&view, writer)?;
            } else {
                export::write_csv(&view, writer)?;
            }
            Ok(view.len())
        }
    }
}
