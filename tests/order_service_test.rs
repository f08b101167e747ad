use bigdecimal::BigDecimal;
use coffee_orders::model::{CreateOrderRequest, DeliveryAddress, OrderLineRequest, OrderStatus};
use coffee_orders::order_service::{OrderError, OrderService, TotalsPolicy};
use coffee_orders::store::mock::MockOrderStore;
use coffee_orders::store::StoreError;
use std::path::PathBuf;
use std::sync::Arc;

/// Service with a mocked store: exercises the paths a real file rarely hits.
fn service(store: &MockOrderStore) -> OrderService {
    OrderService::new(Arc::new(store.clone()), TotalsPolicy::Trusting)
}

fn deliver_request() -> CreateOrderRequest {
    CreateOrderRequest {
        items: vec![OrderLineRequest {
            coffee_id: Some("1".to_string()),
            name: Some("Caffe Mocha".to_string()),
            description: Some("Deep Foam".to_string()),
            price: Some(BigDecimal::new(453.into(), 2)),
            size: Some("M".to_string()),
            quantity: Some(3),
        }],
        delivery_type: Some("deliver".to_string()),
        address: Some(DeliveryAddress {
            city: "Bilzen".to_string(),
            ..DeliveryAddress::default()
        }),
        subtotal: Some(13.59),
        delivery_fee: Some(1.0),
        total: Some(14.59),
    }
}

#[tokio::test]
async fn test_create_order_hands_order_to_store() {
    let store = MockOrderStore::new();
    store.expect_append().return_ok();

    let order = service(&store).create_order(deliver_request()).await.unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items[0].quantity, 3);
    assert_eq!(order.address.as_ref().unwrap().city, "Bilzen");
    assert_eq!(store.appended(), vec![order]);
    store.verify();
}

#[tokio::test]
async fn test_storage_failure_is_storage_error() {
    let store = MockOrderStore::new();
    store.expect_append().return_err(StoreError::Io {
        path: PathBuf::from("data/orders.json"),
        source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
    });

    let result = service(&store).create_order(deliver_request()).await;

    match result {
        Err(OrderError::StorageError(msg)) => assert!(msg.contains("disk full"), "{msg}"),
        other => panic!("expected StorageError, got {other:?}"),
    }
    store.verify();
}

#[tokio::test]
async fn test_corrupt_store_on_list() {
    let store = MockOrderStore::new();
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    store.expect_load().return_err(StoreError::Corrupt {
        path: PathBuf::from("data/orders.json"),
        source,
    });

    let result = service(&store).list_orders().await;

    assert!(matches!(result, Err(OrderError::CorruptStore(_))));
    assert!(!result.unwrap_err().is_client_error());
    store.verify();
}

#[tokio::test]
async fn test_validation_failure_never_reaches_store() {
    let store = MockOrderStore::new();
    let mut request = deliver_request();
    request.address = None;

    let result = service(&store).create_order(request).await;

    assert_eq!(result, Err(OrderError::MissingAddress));
    assert!(store.appended().is_empty());
    store.verify();
}
