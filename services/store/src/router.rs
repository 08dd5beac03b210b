use axum::{
    Router,
    routing::{delete, get, post, put},
};

use periph_core::health::healthz;
use periph_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    account::{login, register},
    health::readyz,
    orders::{list_orders, place_order},
    products::{create_product, delete_product, list_products, update_product},
    scrape::scrape,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/register", post(register))
        .route("/login", post(login))
        // Catalog
        .route("/products", get(list_products))
        .route("/products", post(create_product))
        .route("/products/{external_id}", put(update_product))
        .route("/products/{external_id}", delete(delete_product))
        // Orders
        .route("/orders", get(list_orders))
        .route("/orders", post(place_order))
        // Ingestion
        .route("/scrape", get(scrape))
        // Outermost last: the id is set before the trace span opens.
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
