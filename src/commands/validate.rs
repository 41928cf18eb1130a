//! Validate command - load an inventory and report its shape

use crate::{
    VitrineError,
    inventory::{Inventory, InventorySource, Loader},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, VitrineError>;

/// Execute the validate command
///
/// # Errors
/// Returns the transport, parse or schema error of an invalid inventory.
pub fn execute<S: InventorySource>(loader: Loader<S>, out: &dyn OutputWriter) -> Result<Inventory> {
    let inventory = loader.try_load()?;
    out.success(&summary(&inventory));
    Ok(inventory)
}

fn summary(inventory: &Inventory) -> String {
    let count = inventory.len();
    let noun = if count == 1 { "item" } else { "items" };
    if inventory.meta.last_updated.is_empty() {
        format!("Valid inventory: {count} {noun}")
    } else {
        format!(
            "Valid inventory: {count} {noun} (last updated {})",
            inventory.meta.last_updated
        )
    }
}
