//! Core types for Cartlet

use serde::{Deserialize, Serialize};

/// One purchasable item from the backend catalog.
///
/// Server-owned and immutable from the client's perspective; the staged
/// quantity a user dials up before adding to the cart lives in view state,
/// never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub content: String,
}

/// One entry in the user's cart, as persisted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub content: String,
    pub quantity: i64,
}

/// Request body for `POST /cart`.
///
/// The id is the inventory id of the item being added; the server echoes
/// back the canonical cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub content: String,
    pub quantity: i64,
    pub id: String,
}

impl NewCartItem {
    /// Build the create body for an inventory item and a staged quantity.
    pub fn from_inventory(item: &InventoryItem, quantity: i64) -> Self {
        Self {
            content: item.content.clone(),
            quantity,
            id: item.id.clone(),
        }
    }
}

/// Request body for `PATCH /cart/:id`.
///
/// The quantity is absolute, not a delta; callers compute the new total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityPatch {
    pub id: String,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_item_wire_format() {
        let json = r#"{"id":"1","content":"Apple"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, "1");
        assert_eq!(item.content, "Apple");

        let round_trip = serde_json::to_string(&item).unwrap();
        let back: InventoryItem = serde_json::from_str(&round_trip).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_cart_item_wire_format() {
        let json = r#"{"id":"1","content":"Apple","quantity":2}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, "1");
        assert_eq!(item.content, "Apple");
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_new_cart_item_from_inventory() {
        let inventory = InventoryItem {
            id: "7".to_string(),
            content: "Pear".to_string(),
        };

        let body = NewCartItem::from_inventory(&inventory, 3);

        assert_eq!(body.id, "7");
        assert_eq!(body.content, "Pear");
        assert_eq!(body.quantity, 3);
    }

    #[test]
    fn test_new_cart_item_serializes_all_fields() {
        let body = NewCartItem {
            content: "Apple".to_string(),
            quantity: 1,
            id: "1".to_string(),
        };

        let value: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["content"], "Apple");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["id"], "1");
    }

    #[test]
    fn test_quantity_patch_serializes_id_and_quantity() {
        let patch = QuantityPatch {
            id: "4".to_string(),
            quantity: 5,
        };

        let value: serde_json::Value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value["id"], "4");
        assert_eq!(value["quantity"], 5);
    }

    #[test]
    fn test_cart_item_negative_quantity_round_trips() {
        // Staged counters are unguarded and may go negative; the wire type
        // must not reject what the UI can produce.
        let json = r#"{"id":"9","content":"Fig","quantity":-2}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, -2);
    }
}
