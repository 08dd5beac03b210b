use axum::{
    Json,
    extract::{Path, State},
};

use periph_domain::product::{Product, ProductPatch};

use crate::error::StoreServiceError;
use crate::handlers::MessageResponse;
use crate::handlers::extract::AdminOnly;
use crate::state::AppState;
use crate::usecase::catalog::{
    CreateProductUseCase, DeleteProductUseCase, ListProductsUseCase, UpdateProductUseCase,
};

// ── POST /products ────────────────────────────────────────────────────────────

pub async fn create_product(
    AdminOnly(_): AdminOnly,
    State(state): State<AppState>,
    Json(body): Json<Product>,
) -> Result<Json<MessageResponse>, StoreServiceError> {
    let usecase = CreateProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(body).await?;
    Ok(Json(MessageResponse::new("Product added!")))
}

// ── GET /products ─────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, StoreServiceError> {
    let usecase = ListProductsUseCase {
        repo: state.product_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── PUT /products/{external_id} ───────────────────────────────────────────────

pub async fn update_product(
    AdminOnly(_): AdminOnly,
    State(state): State<AppState>,
    Path(external_id): Path<String>,
    Json(body): Json<ProductPatch>,
) -> Result<Json<MessageResponse>, StoreServiceError> {
    let usecase = UpdateProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(&external_id, body).await?;
    Ok(Json(MessageResponse::new("Product updated!")))
}

// ── DELETE /products/{external_id} ────────────────────────────────────────────

pub async fn delete_product(
    AdminOnly(_): AdminOnly,
    State(state): State<AppState>,
    Path(external_id): Path<String>,
) -> Result<Json<MessageResponse>, StoreServiceError> {
    let usecase = DeleteProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(&external_id).await?;
    Ok(Json(MessageResponse::new("Product deleted!")))
}
