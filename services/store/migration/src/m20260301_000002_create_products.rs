use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::ExternalId).string())
                    .col(ColumnDef::new(Products::Name).string())
                    .col(ColumnDef::new(Products::Price).string())
                    .col(ColumnDef::new(Products::Link).text())
                    .col(
                        ColumnDef::new(Products::Extra)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: duplicate external ids are accepted.
        manager
            .create_index(
                Index::create()
                    .table(Products::Table)
                    .col(Products::ExternalId)
                    .name("idx_products_external_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
    ExternalId,
    Name,
    Price,
    Link,
    Extra,
    CreatedAt,
}
