use chrono::Utc;
use serde_json::json;

use periph_domain::order::{LineItem, Order};
use periph_domain::user::UserRole;
use periph_store::error::StoreServiceError;
use periph_store::usecase::order::{ListOrdersUseCase, PlaceOrderUseCase};

use crate::helpers::{LeakyOrderRepo, MockOrderRepo, admin, alice, test_user};

fn items(value: serde_json::Value) -> Vec<LineItem> {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn should_record_order_for_caller() {
    let repo = MockOrderRepo::empty();
    let before = Utc::now();

    let order = PlaceOrderUseCase { repo: &repo }
        .execute(&alice().subject(), items(json!(["p1", "p2"])))
        .await
        .unwrap();

    assert_eq!(order.user_id, "alice");
    assert!(order.timestamp >= before);
    assert_eq!(*repo.orders_handle().lock().unwrap(), vec![order]);
}

#[tokio::test]
async fn should_not_validate_line_items_against_catalog() {
    let repo = MockOrderRepo::empty();

    PlaceOrderUseCase { repo: &repo }
        .execute(
            &alice().subject(),
            items(json!([{"id": "does-not-exist", "quantity": 2, "note": "gift"}])),
        )
        .await
        .unwrap();

    let stored = repo.orders_handle().lock().unwrap()[0].clone();
    assert_eq!(stored.products[0].product_id(), Some("does-not-exist"));
}

#[tokio::test]
async fn should_store_line_items_without_string_reference_as_supplied() {
    let repo = MockOrderRepo::empty();
    let supplied = json!([101, {"id": 7}, {"name": "Mouse", "qty": 1}]);

    PlaceOrderUseCase { repo: &repo }
        .execute(&alice().subject(), items(supplied.clone()))
        .await
        .unwrap();

    let stored = repo.orders_handle().lock().unwrap()[0].clone();
    assert!(stored.products.iter().all(|item| item.product_id().is_none()));
    assert_eq!(serde_json::to_value(&stored.products).unwrap(), supplied);
}

#[tokio::test]
async fn should_reject_empty_product_list() {
    let repo = MockOrderRepo::empty();

    let result = PlaceOrderUseCase { repo: &repo }
        .execute(&alice().subject(), vec![])
        .await;
    assert!(matches!(result, Err(StoreServiceError::MissingData)));
    assert!(repo.orders_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_list_only_callers_orders() {
    let repo = MockOrderRepo::empty();
    let place = PlaceOrderUseCase { repo: &repo };
    place
        .execute(&alice().subject(), items(json!(["p1"])))
        .await
        .unwrap();
    place
        .execute(&test_user("bob", UserRole::User).subject(), items(json!(["p2"])))
        .await
        .unwrap();

    let orders = ListOrdersUseCase { repo: &repo }
        .execute(&alice().subject())
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].user_id, "alice");
    assert_eq!(orders[0].products, items(json!(["p1"])));
}

#[tokio::test]
async fn should_not_show_other_users_orders_to_admin() {
    let repo = MockOrderRepo::empty();
    PlaceOrderUseCase { repo: &repo }
        .execute(&alice().subject(), items(json!(["p1"])))
        .await
        .unwrap();

    let orders = ListOrdersUseCase { repo: &repo }
        .execute(&admin().subject())
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn should_filter_foreign_orders_returned_by_store() {
    let foreign = Order {
        user_id: "bob".to_owned(),
        products: items(json!(["p2"])),
        timestamp: Utc::now(),
    };
    let own = Order {
        user_id: "alice".to_owned(),
        products: items(json!(["p1"])),
        timestamp: Utc::now(),
    };

    let orders = ListOrdersUseCase {
        repo: LeakyOrderRepo {
            orders: vec![foreign, own.clone()],
        },
    }
    .execute(&alice().subject())
    .await
    .unwrap();
    assert_eq!(orders, vec![own]);
}
