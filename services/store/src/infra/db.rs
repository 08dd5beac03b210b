use std::sync::Arc;

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use periph_domain::order::Order;
use periph_domain::product::{Product, ProductPatch};
use periph_domain::user::UserRole;
use periph_store_schema::{orders, products, users};

use crate::domain::repository::{OrderRepository, ProductRepository, UserRepository};
use crate::domain::types::User;
use crate::error::StoreServiceError;

// ── User repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreServiceError> {
        let model = users::Entity::find_by_id(username.to_owned())
            .one(self.db.as_ref())
            .await
            .context("find user by username")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), StoreServiceError> {
        let result = users::ActiveModel {
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_owned()),
            created_at: Set(user.created_at),
        }
        .insert(self.db.as_ref())
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(StoreServiceError::UserAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> Result<User, StoreServiceError> {
    let role = model
        .role
        .parse::<UserRole>()
        .with_context(|| format!("stored role for {}", model.username))?;
    Ok(User {
        username: model.username,
        password_hash: model.password_hash,
        role,
        created_at: model.created_at,
    })
}

// ── Product repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ProductRepository for DbProductRepository {
    async fn create(&self, product: &Product) -> Result<(), StoreServiceError> {
        new_product_model(product)
            .insert(self.db.as_ref())
            .await
            .context("create product")?;
        Ok(())
    }

    async fn create_many(&self, products: &[Product]) -> Result<u64, StoreServiceError> {
        if products.is_empty() {
            return Ok(0);
        }
        let inserted = products::Entity::insert_many(products.iter().map(new_product_model))
            .exec_without_returning(self.db.as_ref())
            .await
            .context("insert product batch")?;
        Ok(inserted)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreServiceError> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::CreatedAt)
            .order_by_asc(products::Column::Id)
            .all(self.db.as_ref())
            .await
            .context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn update(
        &self,
        external_id: &str,
        patch: ProductPatch,
    ) -> Result<bool, StoreServiceError> {
        let external_id = external_id.to_owned();
        let matched = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let Some(model) = products::Entity::find()
                        .filter(products::Column::ExternalId.eq(external_id))
                        .order_by_asc(products::Column::CreatedAt)
                        .order_by_asc(products::Column::Id)
                        .lock_exclusive()
                        .one(txn)
                        .await?
                    else {
                        return Ok(false);
                    };

                    let id = model.id;
                    let mut product = product_from_model(model);
                    product.merge(patch);

                    products::ActiveModel {
                        id: Set(id),
                        external_id: Set(product.external_id),
                        name: Set(product.name),
                        price: Set(product.price),
                        link: Set(product.link),
                        extra: Set(Value::Object(product.extra)),
                        ..Default::default()
                    }
                    .update(txn)
                    .await?;
                    Ok(true)
                })
            })
            .await
            .context("update product")?;
        Ok(matched)
    }

    async fn delete(&self, external_id: &str) -> Result<bool, StoreServiceError> {
        let first = products::Entity::find()
            .filter(products::Column::ExternalId.eq(external_id))
            .order_by_asc(products::Column::CreatedAt)
            .order_by_asc(products::Column::Id)
            .one(self.db.as_ref())
            .await
            .context("find product to delete")?;
        let Some(model) = first else {
            return Ok(false);
        };

        let result = products::Entity::delete_by_id(model.id)
            .exec(self.db.as_ref())
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }
}

fn new_product_model(product: &Product) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(Uuid::now_v7()),
        external_id: Set(product.external_id.clone()),
        name: Set(product.name.clone()),
        price: Set(product.price.clone()),
        link: Set(product.link.clone()),
        extra: Set(Value::Object(product.extra.clone())),
        created_at: Set(Utc::now()),
    }
}

fn product_from_model(model: products::Model) -> Product {
    let extra = match model.extra {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Product {
        external_id: model.external_id,
        name: model.name,
        price: model.price,
        link: model.link,
        extra,
    }
}

// ── Order repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: Arc<DatabaseConnection>,
}

impl OrderRepository for DbOrderRepository {
    async fn create(&self, order: &Order) -> Result<(), StoreServiceError> {
        let products = serde_json::to_value(&order.products).context("encode line items")?;
        orders::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(order.user_id.clone()),
            products: Set(products),
            created_at: Set(order.timestamp),
        }
        .insert(self.db.as_ref())
        .await
        .context("create order")?;
        Ok(())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, StoreServiceError> {
        let models = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .order_by_asc(orders::Column::CreatedAt)
            .order_by_asc(orders::Column::Id)
            .all(self.db.as_ref())
            .await
            .context("list orders by user")?;
        models
            .into_iter()
            .map(order_from_model)
            .collect::<Result<_, _>>()
    }
}

fn order_from_model(model: orders::Model) -> Result<Order, StoreServiceError> {
    let products = serde_json::from_value(model.products)
        .with_context(|| format!("decode line items of order {}", model.id))?;
    Ok(Order {
        user_id: model.user_id,
        products,
        timestamp: model.created_at,
    })
}
