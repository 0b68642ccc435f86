//! End-to-end cart flows against the mock backend
//!
//! Drives `ShopService` the way a frontend does: subscribe to store
//! events, run operations, and assert both the calls that reached the
//! backend and the notifications that came back.

use std::sync::Arc;

use libcartlet::client::{MockCall, MockStoreApi};
use libcartlet::service::ShopService;
use libcartlet::types::{CartItem, InventoryItem, NewCartItem};
use libcartlet::{Config, StoreEvent};

fn inventory_item(id: &str, content: &str) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        content: content.to_string(),
    }
}

fn cart_item(id: &str, content: &str, quantity: i64) -> CartItem {
    CartItem {
        id: id.to_string(),
        content: content.to_string(),
        quantity,
    }
}

#[tokio::test]
async fn startup_fetches_populate_store_and_notify() {
    let api = Arc::new(
        MockStoreApi::new()
            .with_inventory(vec![inventory_item("1", "Apple")])
            .with_cart(vec![cart_item("2", "Pear", 1)]),
    );
    let service = ShopService::with_api(Config::default(), api);
    let mut events = service.subscribe();

    service.cart().refresh_inventory().await.unwrap();
    service.cart().refresh_cart().await.unwrap();

    match events.try_recv().unwrap() {
        StoreEvent::InventoryChanged { inventory } => {
            assert_eq!(inventory, vec![inventory_item("1", "Apple")]);
        }
        other => panic!("expected inventory event, got {:?}", other),
    }
    match events.try_recv().unwrap() {
        StoreEvent::CartChanged { cart } => {
            assert_eq!(cart, vec![cart_item("2", "Pear", 1)]);
        }
        other => panic!("expected cart event, got {:?}", other),
    }
}

#[tokio::test]
async fn deleting_the_only_cart_item_leaves_an_empty_cart() {
    // Cart [{id:"1", content:"Apple", quantity:2}], delete id "1"
    let seeded = vec![cart_item("1", "Apple", 2)];
    let api = Arc::new(MockStoreApi::new().with_cart(seeded.clone()));
    let service = ShopService::with_api(Config::default(), api.clone());
    service.store().set_cart(seeded);
    let mut events = service.subscribe();

    service.cart().delete_item("1").await.unwrap();

    assert_eq!(
        api.calls(),
        vec![MockCall::Delete {
            id: "1".to_string()
        }]
    );
    match events.try_recv().unwrap() {
        StoreEvent::CartChanged { cart } => assert!(cart.is_empty()),
        other => panic!("expected cart event, got {:?}", other),
    }
}

#[tokio::test]
async fn staging_three_onto_an_existing_two_updates_to_five() {
    // Existing {id:"1", quantity:2}, staged 3 -> update to 5, not 3
    let seeded = vec![cart_item("1", "Apple", 2)];
    let api = Arc::new(MockStoreApi::new().with_cart(seeded.clone()));
    let service = ShopService::with_api(Config::default(), api.clone());
    service.store().set_cart(seeded);

    service
        .cart()
        .add_to_cart(&inventory_item("1", "Apple"), 3)
        .await
        .unwrap();

    assert!(api.calls().contains(&MockCall::Update {
        id: "1".to_string(),
        quantity: 5
    }));
    assert_eq!(service.store().cart()[0].quantity, 5);
}

#[tokio::test]
async fn adding_a_new_item_prepends_the_server_record() {
    let api = Arc::new(MockStoreApi::new().with_cart(vec![cart_item("9", "Fig", 4)]));
    let service = ShopService::with_api(Config::default(), api);
    service.store().set_cart(vec![cart_item("9", "Fig", 4)]);

    service
        .cart()
        .add_to_cart(&inventory_item("1", "Apple"), 1)
        .await
        .unwrap();

    let cart = service.store().cart();
    assert_eq!(cart[0], cart_item("1", "Apple", 1));
    assert_eq!(cart[1], cart_item("9", "Fig", 4));
}

#[tokio::test]
async fn checkout_empties_the_local_cart_whatever_the_backend_did() {
    let seeded = vec![cart_item("1", "Apple", 2), cart_item("2", "Pear", 1)];
    let api = Arc::new(
        MockStoreApi::new()
            .with_cart(seeded.clone())
            .fail_delete("connection reset"),
    );
    let service = ShopService::with_api(Config::default(), api);
    service.store().set_cart(seeded);
    let mut events = service.subscribe();

    let result = service.cart().checkout().await;

    assert!(result.is_err());
    assert!(service.store().cart().is_empty());
    match events.try_recv().unwrap() {
        StoreEvent::CartChanged { cart } => assert!(cart.is_empty()),
        other => panic!("expected cart event, got {:?}", other),
    }
}

#[tokio::test]
async fn failed_refresh_leaves_the_store_silent() {
    let api = Arc::new(MockStoreApi::new().fail_list_inventory("dns failure"));
    let service = ShopService::with_api(Config::default(), api);
    let mut events = service.subscribe();

    let result = service.cart().refresh_inventory().await;

    assert!(result.is_err());
    assert!(service.store().inventory().is_empty());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn wire_body_for_create_carries_inventory_id() {
    let api = MockStoreApi::new();
    let body = NewCartItem::from_inventory(&inventory_item("42", "Plum"), 2);

    use libcartlet::StoreApi;
    let created = api.add_cart_item(&body).await.unwrap();

    assert_eq!(created.id, "42");
    assert_eq!(created.quantity, 2);
}
