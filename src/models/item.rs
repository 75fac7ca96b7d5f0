//! Item Model
//!
//! The single persisted resource and the value types used to create and change it.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Item Id ==
/// System-assigned item identifier. Ids start at 1 and are never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Parses an id from a URL path segment.
    ///
    /// Returns None for anything that is not a positive integer.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<u64>().ok().filter(|id| *id > 0).map(ItemId)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// == Item ==
/// A stored inventory item. This is also its wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub quantity: i64,
}

impl Item {
    /// Returns a copy of this item with the given changes applied.
    ///
    /// Fields left as None keep their current value. The id never changes.
    pub fn apply(&self, changes: ItemChanges) -> Item {
        Item {
            id: self.id,
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            description: changes
                .description
                .unwrap_or_else(|| self.description.clone()),
            quantity: changes.quantity.unwrap_or(self.quantity),
        }
    }
}

// == New Item ==
/// Validated fields for an item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub quantity: i64,
}

impl NewItem {
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
        }
    }
}

// == Item Changes ==
/// Validated partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item {
            id: ItemId(7),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            quantity: 3,
        }
    }

    #[test]
    fn test_item_id_parse() {
        assert_eq!(ItemId::parse("42"), Some(ItemId(42)));
        assert_eq!(ItemId::parse("0"), None);
        assert_eq!(ItemId::parse("-1"), None);
        assert_eq!(ItemId::parse("abc"), None);
        assert_eq!(ItemId::parse(""), None);
    }

    #[test]
    fn test_apply_partial_changes() {
        let item = sample();
        let updated = item.apply(ItemChanges {
            quantity: Some(5),
            ..Default::default()
        });

        assert_eq!(updated.id, ItemId(7));
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.description, "A widget");
        assert_eq!(updated.quantity, 5);
    }

    #[test]
    fn test_apply_empty_changes_is_identity() {
        let item = sample();
        assert_eq!(item.apply(ItemChanges::default()), item);
    }

    #[test]
    fn test_item_wire_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["description"], "A widget");
        assert_eq!(json["quantity"], 3);
    }

    #[test]
    fn test_new_item_into_item() {
        let new = NewItem {
            name: "Bolt".to_string(),
            description: String::new(),
            quantity: 100,
        };
        let item = new.into_item(ItemId(1));
        assert_eq!(item.id, ItemId(1));
        assert_eq!(item.name, "Bolt");
        assert_eq!(item.quantity, 100);
    }
}
