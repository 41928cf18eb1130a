//! Machine-readable output for `search`

use crate::VitrineError;
use crate::inventory::InventoryItem;
use serde::Serialize;
use std::io::Write;

type Result<T> = std::result::Result<T, VitrineError>;

/// Write items as a pretty-printed JSON array (same field names as the dataset)
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_json<W: Write>(items: &[&InventoryItem], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, items)?;
    writeln!(writer)?;
    Ok(())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    price: f64,
    currency: &'a str,
    in_stock: bool,
    tags: String,
    created_at: &'a str,
    image: &'a str,
}

impl<'a> From<&'a InventoryItem> for CsvRow<'a> {
    fn from(item: &'a InventoryItem) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            category: &item.category,
            price: item.price,
            currency: &item.currency,
            in_stock: item.in_stock,
            tags: item.tags.join(";"),
            created_at: &item.created_at,
            image: &item.image,
        }
    }
}

/// Write items as CSV with a header row; tags are `;`-separated
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_csv<W: Write>(items: &[&InventoryItem], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if items.is_empty() {
        wtr.write_record([
            "id", "name", "category", "price", "currency", "in_stock", "tags", "created_at",
            "image",
        ])?;
    }
    for item in items {
        wtr.serialize(CsvRow::from(*item))?;
    }
    wtr.flush()?;
    Ok(())
}
