//! Flat shape check for inventory documents
//!
//! Runs before deserialization so that a bad document is rejected with a
//! message naming the first offending field, rather than a serde position.
//! The whole document is rejected on the first failure.

use super::error::{FieldKind, SchemaError};
use serde_json::Value;

/// Required item fields, in the order they are checked
pub const ITEM_FIELDS: [(&str, FieldKind); 10] = [
    ("id", FieldKind::String),
    ("name", FieldKind::String),
    ("description", FieldKind::String),
    ("category", FieldKind::String),
    ("price", FieldKind::Number),
    ("currency", FieldKind::String),
    ("inStock", FieldKind::Boolean),
    ("tags", FieldKind::Array),
    ("image", FieldKind::String),
    ("createdAt", FieldKind::String),
];

fn has_kind(value: Option<&Value>, kind: FieldKind) -> bool {
    match (value, kind) {
        (Some(Value::Object(_)), FieldKind::Object)
        | (Some(Value::Array(_)), FieldKind::Array)
        | (Some(Value::String(_)), FieldKind::String)
        | (Some(Value::Number(_)), FieldKind::Number)
        | (Some(Value::Bool(_)), FieldKind::Boolean) => true,
        _ => false,
    }
}

/// Validate an inventory document
///
/// # Errors
///
/// Returns the first `SchemaError` found, checking the root, `items`,
/// `meta.lastUpdated`, then every item field in order.
pub fn validate(doc: &Value) -> Result<(), SchemaError> {
    let Some(root) = doc.as_object() else {
        return Err(SchemaError::new("root", FieldKind::Object));
    };

    let Some(items) = root.get("items").and_then(Value::as_array) else {
        return Err(SchemaError::new("items", FieldKind::Array));
    };

    let last_updated = root.get("meta").and_then(|meta| meta.get("lastUpdated"));
    if !has_kind(last_updated, FieldKind::String) {
        return Err(SchemaError::new("meta.lastUpdated", FieldKind::String));
    }

    for (index, item) in items.iter().enumerate() {
        validate_item(index, item)?;
    }

    Ok(())
}

fn validate_item(index: usize, item: &Value) -> Result<(), SchemaError> {
    let Some(fields) = item.as_object() else {
        return Err(SchemaError::new(format!("items[{index}]"), FieldKind::Object));
    };

    for (name, kind) in ITEM_FIELDS {
        if !has_kind(fields.get(name), kind) {
            return Err(SchemaError::new(format!("items[{index}].{name}"), kind));
        }
    }

    // Typed model needs string tags
    if let Some(Value::Array(tags)) = fields.get("tags")
        && let Some(pos) = tags.iter().position(|t| !t.is_string())
    {
        return Err(SchemaError::new(
            format!("items[{index}].tags[{pos}]"),
            FieldKind::String,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn good_item() -> Value {
        json!({
            "id": "1",
            "name": "Desk Lamp",
            "description": "Warm light",
            "category": "Lighting",
            "price": 19.99,
            "currency": "USD",
            "inStock": true,
            "tags": ["desk", "led"],
            "image": "https://example.com/lamp.jpg",
            "createdAt": "2024-01-10"
        })
    }

    fn doc_with(items: Vec<Value>) -> Value {
        json!({ "items": items, "meta": { "lastUpdated": "2024-02-01" } })
    }

    #[test]
    fn test_valid_document() {
        assert!(validate(&doc_with(vec![good_item(), good_item()])).is_ok());
        assert!(validate(&doc_with(vec![])).is_ok());
    }

    #[test]
    fn test_root_must_be_object() {
        let err = validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.field(), "root");
    }

    #[test]
    fn test_items_must_be_array() {
        let err = validate(&json!({ "items": {}, "meta": { "lastUpdated": "" } })).unwrap_err();
        assert_eq!(err.to_string(), "items must be an array");
    }

    #[test]
    fn test_missing_last_updated() {
        let err = validate(&json!({ "items": [], "meta": {} })).unwrap_err();
        assert_eq!(err.field(), "meta.lastUpdated");
        assert!(err.to_string().contains("meta.lastUpdated"));

        let err = validate(&json!({ "items": [] })).unwrap_err();
        assert_eq!(err.field(), "meta.lastUpdated");
    }

    #[test]
    fn test_missing_price_names_index() {
        let mut broken = good_item();
        broken.as_object_mut().unwrap().remove("price");
        let err = validate(&doc_with(vec![good_item(), broken])).unwrap_err();
        assert_eq!(err.field(), "items[1].price");
        assert_eq!(err.to_string(), "items[1].price must be a number");
    }

    #[test]
    fn test_first_failure_wins() {
        let mut first = good_item();
        first["name"] = json!(42);
        first["inStock"] = json!("yes");
        let mut second = good_item();
        second["id"] = json!(null);
        let err = validate(&doc_with(vec![first, second])).unwrap_err();
        assert_eq!(err.field(), "items[0].name");
    }

    #[test]
    fn test_items_checked_before_meta() {
        let err = validate(&json!({ "items": "nope" })).unwrap_err();
        assert_eq!(err.field(), "items");
    }

    #[test]
    fn test_wrong_types() {
        let mut item = good_item();
        item["inStock"] = json!(1);
        let err = validate(&doc_with(vec![item])).unwrap_err();
        assert_eq!(err.field(), "items[0].inStock");

        let mut item = good_item();
        item["tags"] = json!("a,b");
        let err = validate(&doc_with(vec![item])).unwrap_err();
        assert_eq!(err.field(), "items[0].tags");
    }

    #[test]
    fn test_tag_entries_must_be_strings() {
        let mut item = good_item();
        item["tags"] = json!(["ok", 5]);
        let err = validate(&doc_with(vec![item])).unwrap_err();
        assert_eq!(err.field(), "items[0].tags[1]");
    }

    #[test]
    fn test_item_must_be_object() {
        let err = validate(&doc_with(vec![json!("lamp")])).unwrap_err();
        assert_eq!(err.to_string(), "items[0] must be an object");
    }
}
