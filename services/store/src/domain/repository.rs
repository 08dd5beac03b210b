#![allow(async_fn_in_trait)]

use periph_domain::order::Order;
use periph_domain::product::{Product, ProductPatch};

use crate::domain::types::{FetchError, User};
use crate::error::StoreServiceError;

/// Credential store: account persistence.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreServiceError>;

    /// Insert a new account. Returns `UserAlreadyExists` if the username is taken.
    async fn create(&self, user: &User) -> Result<(), StoreServiceError>;
}

impl<T: UserRepository> UserRepository for &T {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreServiceError> {
        (**self).find_by_username(username).await
    }

    async fn create(&self, user: &User) -> Result<(), StoreServiceError> {
        (**self).create(user).await
    }
}

/// Catalog store.
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), StoreServiceError>;

    /// Insert all products in one batch write. Returns the number inserted.
    async fn create_many(&self, products: &[Product]) -> Result<u64, StoreServiceError>;

    /// All products, oldest first.
    async fn list(&self) -> Result<Vec<Product>, StoreServiceError>;

    /// Merge `patch` into the first product whose external id matches.
    /// Returns `false` when nothing matched.
    async fn update(
        &self,
        external_id: &str,
        patch: ProductPatch,
    ) -> Result<bool, StoreServiceError>;

    /// Delete the first product whose external id matches.
    /// Returns `false` when nothing matched.
    async fn delete(&self, external_id: &str) -> Result<bool, StoreServiceError>;
}

impl<T: ProductRepository> ProductRepository for &T {
    async fn create(&self, product: &Product) -> Result<(), StoreServiceError> {
        (**self).create(product).await
    }

    async fn create_many(&self, products: &[Product]) -> Result<u64, StoreServiceError> {
        (**self).create_many(products).await
    }

    async fn list(&self) -> Result<Vec<Product>, StoreServiceError> {
        (**self).list().await
    }

    async fn update(
        &self,
        external_id: &str,
        patch: ProductPatch,
    ) -> Result<bool, StoreServiceError> {
        (**self).update(external_id, patch).await
    }

    async fn delete(&self, external_id: &str) -> Result<bool, StoreServiceError> {
        (**self).delete(external_id).await
    }
}

/// Order store. Append-only.
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &Order) -> Result<(), StoreServiceError>;

    /// Orders placed by `user_id`, oldest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, StoreServiceError>;
}

impl<T: OrderRepository> OrderRepository for &T {
    async fn create(&self, order: &Order) -> Result<(), StoreServiceError> {
        (**self).create(order).await
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, StoreServiceError> {
        (**self).list_by_user(user_id).await
    }
}

/// Source of the external catalog page.
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
