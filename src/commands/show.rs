//! Show command - details card for one item

use crate::{
    VitrineError,
    inventory::{InventorySource, Loader},
    ui::{GridPresenter, Presenter},
};
use std::io::Write;

type Result<T> = std::result::Result<T, VitrineError>;

/// Execute the show command
///
/// # Errors
/// Returns an error if the inventory cannot be loaded or has no item `id`.
pub fn execute<S: InventorySource, W: Write, E: Write>(
    loader: Loader<S>,
    id: &str,
    presenter: &mut GridPresenter<W, E>,
) -> Result<()> {
    let inventory = loader.try_load()?;
    let item = inventory
        .get(id)
        .ok_or_else(|| VitrineError::InvalidInput(format!("No item with id '{id}'")))?;

    presenter.show_details(item);
    if let Some(e) = presenter.take_io_error() {
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ReaderSource;
    use std::io::Cursor;

    const DOC: &str = r#"{
        "items": [
            {"id": "a", "name": "Desk Lamp", "description": "Brass, warm light", "category": "Lighting",
             "price": 20, "currency": "USD", "inStock": true, "tags": ["brass"], "image": "",
             "createdAt": "2024-01-01"}
        ],
        "meta": {"lastUpdated": "2024-06-01"}
    }"#;

    fn loader() -> Loader<ReaderSource<Cursor<&'static str>>> {
        Loader::new(ReaderSource::new("memory", Cursor::new(DOC)))
    }

    #[test]
    fn test_show_prints_details() {
        let mut presenter = GridPresenter::new(Vec::new(), Vec::new(), 3);
        execute(loader(), "a", &mut presenter).unwrap();
        let (out, _) = presenter.into_writers();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Desk Lamp"));
        assert!(out.contains("Brass, warm light"));
        assert!(out.contains("(no image)"));
    }

    #[test]
    fn test_unknown_id() {
        let mut presenter = GridPresenter::new(Vec::new(), Vec::new(), 3);
        let err = execute(loader(), "zz", &mut presenter).unwrap_err();
        assert!(err.to_string().contains("No item with id 'zz'"));
    }
}
