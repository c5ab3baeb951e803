use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{ItemError, ItemResult};

/// Identifier assigned by the store. Never reused within a process.
pub type ItemId = u64;

/// Item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier
    pub id: ItemId,
    /// Item name, never empty
    pub name: String,
    /// Free-form description, may be empty
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: String,
}

/// DTO for replacing the mutable fields of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: String,
}

/// Body returned by `DELETE /api/items/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteItemResponse {
    pub message: String,
    pub item: Item,
}

/// Plain `{message}` body, used by the root greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

pub const ITEM_DELETED_MESSAGE: &str = "Item deleted successfully";

impl CreateItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl UpdateItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl DeleteItemResponse {
    pub fn new(item: Item) -> Self {
        Self {
            message: ITEM_DELETED_MESSAGE.to_string(),
            item,
        }
    }
}

impl Item {
    /// Create a new item from CreateItem DTO
    pub fn new(id: ItemId, input: CreateItem) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateItem DTO. `id` and `created_at` are untouched.
    pub fn apply_update(&mut self, update: UpdateItem) {
        self.name = update.name;
        self.description = update.description;
        // Clamp so a clock step backwards cannot put updated_at before created_at.
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// Records the store starts with.
pub fn seed_items() -> Vec<CreateItem> {
    vec![
        CreateItem::new("Sample Item 1", "This is a sample item"),
        CreateItem::new("Sample Item 2", "Another sample item"),
    ]
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_992.0;

/// Converts a path segment into an item id.
///
/// Ids compare by numeric value, so any decimal form of a non-negative
/// integer is accepted (`"3"`, `"03"`, `"+3"`, `"3.0"`, `"3e0"`). Anything
/// else cannot name a stored item and is reported as not found rather than
/// as a malformed request.
pub fn parse_item_id(raw: &str) -> ItemResult<ItemId> {
    let text = raw.trim();
    if let Ok(id) = text.parse::<ItemId>() {
        return Ok(id);
    }

    match text.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value >= 0.0
                && value.fract() == 0.0
                && value <= MAX_EXACT_FLOAT_ID =>
        {
            Ok(value as ItemId)
        }
        _ => Err(ItemError::NotFound(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_camel_case() {
        let item = Item::new(7, CreateItem::new("Lamp", ""));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Lamp");
        assert_eq!(json["description"], "");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_new_item_has_equal_timestamps() {
        let item = Item::new(1, CreateItem::new("a", "b"));
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_apply_update_keeps_identity() {
        let mut item = Item::new(3, CreateItem::new("old", "old desc"));
        let created_at = item.created_at;

        item.apply_update(UpdateItem::new("new", ""));

        assert_eq!(item.id, 3);
        assert_eq!(item.name, "new");
        assert_eq!(item.description, "");
        assert_eq!(item.created_at, created_at);
        assert!(item.updated_at >= item.created_at);
    }

    #[test]
    fn test_empty_name_fails_validation() {
        assert!(CreateItem::new("", "desc").validate().is_err());
        assert!(UpdateItem::new("", "desc").validate().is_err());
        assert!(CreateItem::new("x", "").validate().is_ok());
    }

    #[test]
    fn test_description_is_required_on_the_wire() {
        let result: Result<CreateItem, _> = serde_json::from_str(r#"{"name":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("42").unwrap(), 42);
        assert_eq!(parse_item_id(" 5 ").unwrap(), 5);
        for raw in ["abc", "", "-1", "1.5", "0x10", "NaN", "inf", "1e300"] {
            assert!(
                matches!(parse_item_id(raw), Err(ItemError::NotFound(ref key)) if key == raw),
                "{raw:?} should be not found"
            );
        }
    }

    #[test]
    fn test_parse_item_id_accepts_integral_numeric_forms() {
        for raw in ["1", "01", "+1", "1.0", "1.", "1e0", "0.1e1", " 1.00 "] {
            assert_eq!(parse_item_id(raw).unwrap(), 1, "{raw:?}");
        }
        assert_eq!(parse_item_id("2.5e1").unwrap(), 25);
        assert_eq!(parse_item_id("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_seed_items() {
        let seeds = seed_items();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].name, "Sample Item 1");
        assert_eq!(seeds[1].description, "Another sample item");
    }
}
