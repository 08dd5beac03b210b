use chrono::Utc;

use periph_domain::order::{LineItem, Order};
use periph_domain::user::Subject;

use crate::domain::repository::OrderRepository;
use crate::error::StoreServiceError;

// ── PlaceOrder ───────────────────────────────────────────────────────────────

pub struct PlaceOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> PlaceOrderUseCase<R> {
    /// Record an order for `subject`. Line items are stored as given, without
    /// checking them against the catalog.
    pub async fn execute(
        &self,
        subject: &Subject,
        products: Vec<LineItem>,
    ) -> Result<Order, StoreServiceError> {
        if products.is_empty() {
            return Err(StoreServiceError::MissingData);
        }
        let order = Order {
            user_id: subject.username.clone(),
            products,
            timestamp: Utc::now(),
        };
        self.repo.create(&order).await?;
        Ok(order)
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    /// The caller's own orders. Admins see only theirs as well.
    pub async fn execute(&self, subject: &Subject) -> Result<Vec<Order>, StoreServiceError> {
        let orders = self.repo.list_by_user(&subject.username).await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.user_id == subject.username)
            .collect())
    }
}
