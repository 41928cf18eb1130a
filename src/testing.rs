//! Testing utilities for vitrine
//!
//! Fixture builders for inventory items and documents, plus a presenter that
//! records what the session hands it.
//!
//! Only available when compiled with `cfg(test)`.

use crate::inventory::{ErrorSink, Inventory, InventoryItem, Meta};
use crate::ui::Presenter;

/// Build an in-stock item with sensible defaults for the remaining fields
#[must_use]
pub fn item(id: &str, name: &str, price: f64) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        category: "General".to_string(),
        price,
        currency: "USD".to_string(),
        in_stock: true,
        tags: Vec::new(),
        image: String::new(),
        created_at: "2024-01-01".to_string(),
    }
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    in_stock: bool,
    created_at: &str,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        currency: "USD".to_string(),
        in_stock,
        tags: vec![category.to_lowercase()],
        image: format!("https://img.example.com/{id}.jpg"),
        created_at: created_at.to_string(),
    }
}

/// A small mixed catalog
#[must_use]
pub fn sample_items() -> Vec<InventoryItem> {
    vec![
        product("p1", "Desk Lamp", "Adjustable LED lamp", "Lighting", 24.0, true, "2024-03-01"),
        product("p2", "Floor Lamp", "Tall reading light", "Lighting", 89.5, false, "2023-11-12"),
        product("p3", "Oak Shelf", "Solid oak wall shelf", "Furniture", 45.0, true, "2024-01-20"),
        product("p4", "pendant light", "Glass pendant lamp shade", "Lighting", 12.0, true, "2024-05-02"),
        product("p5", "Armchair", "Linen upholstered chair", "Furniture", 310.0, true, "2022-08-30"),
        product("p6", "Plant Pot", "Terracotta pot", "Garden", 7.25, false, "2024-02-14"),
        product("p7", "Watering Can", "Steel watering can", "Garden", 15.0, true, "not-a-date"),
    ]
}

/// Sample catalog wrapped as an inventory
#[must_use]
pub fn sample_inventory() -> Inventory {
    Inventory {
        items: sample_items(),
        meta: Meta {
            last_updated: "2024-06-01".to_string(),
        },
    }
}

/// Presenter that records every call
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub renders: Vec<Vec<String>>,
    pub errors: Vec<String>,
    pub details: Vec<String>,
}

impl RecordingPresenter {
    /// Ids in the most recent render
    #[must_use]
    pub fn last_ids(&self) -> Vec<String> {
        self.renders.last().cloned().unwrap_or_default()
    }
}

impl ErrorSink for RecordingPresenter {
    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, items: &[&InventoryItem]) {
        self.renders.push(items.iter().map(|i| i.id.clone()).collect());
    }

    fn show_details(&mut self, item: &InventoryItem) {
        self.details.push(item.id.clone());
    }
}
