//! Inventory data structures
//!
//! These mirror the on-disk JSON document. Field names are camelCase on the
//! wire (`inStock`, `createdAt`, `lastUpdated`) and snake_case in Rust.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const LOCAL_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A single product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    /// ISO 4217 currency code
    pub currency: String,
    pub in_stock: bool,
    pub tags: Vec<String>,
    /// Image URL, may be empty
    pub image: String,
    /// ISO-8601 date or date-time
    pub created_at: String,
}

impl InventoryItem {
    /// Parse `created_at` as a UTC timestamp
    ///
    /// Accepts RFC 3339 date-times (`2024-03-01T10:00:00Z`), local ISO-8601
    /// date-times without an offset (`2024-03-01T10:00:00`, read as UTC) and
    /// plain dates (`2024-03-01`, taken as midnight UTC). Returns `None` for
    /// anything else.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in LOCAL_DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(dt.and_utc());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

/// Inventory metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub last_updated: String,
}

/// The full, unfiltered catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<InventoryItem>,
    pub meta: Meta,
}

impl Inventory {
    /// The fallback inventory used when loading fails
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
