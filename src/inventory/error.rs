//! Inventory-specific error types
//!
//! Two layers of failure can occur while loading an inventory:
//!
//! - **`SchemaError`**: the document parsed as JSON but does not have the
//!   expected shape. Carries the path of the first offending field.
//! - **`LoadError`**: anything that prevents a valid inventory from being
//!   produced (transport, parse, or schema failure).

use thiserror::Error;

/// Expected primitive shape of a document field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
}

impl FieldKind {
    /// Article + noun used in error messages ("an object", "a string")
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Object => "an object",
            Self::Array => "an array",
            Self::String => "a string",
            Self::Number => "a number",
            Self::Boolean => "a boolean",
        }
    }
}

/// First shape violation found in an inventory document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be {}", expected.describe())]
pub struct SchemaError {
    field: String,
    expected: FieldKind,
}

impl SchemaError {
    /// Create a new schema error for the given field path
    #[must_use]
    pub fn new(field: impl Into<String>, expected: FieldKind) -> Self {
        Self {
            field: field.into(),
            expected,
        }
    }

    /// Path of the offending field, e.g. `items[3].price`
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The shape the field was expected to have
    #[must_use]
    pub const fn expected(&self) -> FieldKind {
        self.expected
    }
}

/// Errors that prevent an inventory from loading
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read
    #[error("Failed to read inventory from {source_name}: {reason}")]
    Transport { source_name: String, reason: String },

    /// The remote source answered with a non-success status
    #[error("Inventory request to {source_name} failed with status {status}")]
    Status { source_name: String, status: u16 },

    /// The document is not valid JSON
    #[error("Inventory is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document does not match the inventory schema
    #[error("Inventory failed validation: {0}")]
    Schema(#[from] SchemaError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_message() {
        let err = SchemaError::new("items[2].price", FieldKind::Number);
        assert_eq!(err.to_string(), "items[2].price must be a number");
        assert_eq!(err.field(), "items[2].price");
        assert_eq!(err.expected(), FieldKind::Number);
    }

    #[test]
    fn test_load_error_wraps_schema() {
        let err: LoadError = SchemaError::new("meta.lastUpdated", FieldKind::String).into();
        assert_eq!(
            err.to_string(),
            "Inventory failed validation: meta.lastUpdated must be a string"
        );
    }

    #[test]
    fn test_transport_error_display() {
        let err = LoadError::Transport {
            source_name: "inventory.json".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("inventory.json"));
    }
}
