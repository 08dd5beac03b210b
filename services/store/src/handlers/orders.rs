use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use periph_core::serde::to_rfc3339_ms;
use periph_domain::order::{LineItem, Order};

use crate::error::StoreServiceError;
use crate::handlers::MessageResponse;
use crate::handlers::extract::Authenticated;
use crate::state::AppState;
use crate::usecase::order::{ListOrdersUseCase, PlaceOrderUseCase};

// ── POST /orders ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub products: Option<Vec<LineItem>>,
}

pub async fn place_order(
    Authenticated(subject): Authenticated,
    State(state): State<AppState>,
    Json(body): Json<PlaceOrderRequest>,
) -> Result<Json<MessageResponse>, StoreServiceError> {
    let usecase = PlaceOrderUseCase {
        repo: state.order_repo(),
    };
    let products = body.products.ok_or(StoreServiceError::MissingData)?;
    usecase.execute(&subject, products).await?;
    Ok(Json(MessageResponse::new("Order placed successfully!")))
}

// ── GET /orders ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OrderResponse {
    pub user_id: String,
    pub products: Vec<LineItem>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            user_id: order.user_id,
            products: order.products,
            timestamp: order.timestamp,
        }
    }
}

pub async fn list_orders(
    Authenticated(subject): Authenticated,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, StoreServiceError> {
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute(&subject).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
