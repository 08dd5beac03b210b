use sea_orm::entity::prelude::*;

/// Catalog entry. `id` is storage-internal; `external_id` is the caller-facing key
/// and is deliberately not unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub link: Option<String>,
    /// Open attribute map (JSON object).
    #[sea_orm(column_type = "JsonBinary")]
    pub extra: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
