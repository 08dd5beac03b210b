use periph_domain::product::{Product, ProductPatch};

use crate::domain::repository::ProductRepository;
use crate::error::StoreServiceError;

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    /// Insert `product` as given. Duplicate external ids are accepted.
    pub async fn execute(&self, product: Product) -> Result<(), StoreServiceError> {
        let has_name = product
            .name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if !has_name {
            return Err(StoreServiceError::MissingData);
        }
        self.repo.create(&product).await
    }
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Product>, StoreServiceError> {
        self.repo.list().await
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    /// Partial merge into the product keyed by `external_id`.
    ///
    /// An unknown `external_id` is not an error: nothing changes and the call succeeds.
    pub async fn execute(
        &self,
        external_id: &str,
        patch: ProductPatch,
    ) -> Result<(), StoreServiceError> {
        if patch.is_empty() {
            return Err(StoreServiceError::MissingData);
        }
        let matched = self.repo.update(external_id, patch).await?;
        if !matched {
            tracing::debug!(external_id, "update matched no product");
        }
        Ok(())
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    /// Remove the product keyed by `external_id`; succeeds whether or not one existed.
    pub async fn execute(&self, external_id: &str) -> Result<(), StoreServiceError> {
        let matched = self.repo.delete(external_id).await?;
        if !matched {
            tracing::debug!(external_id, "delete matched no product");
        }
        Ok(())
    }
}
