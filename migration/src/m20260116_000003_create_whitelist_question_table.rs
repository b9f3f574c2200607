use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WhitelistQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(WhitelistQuestion::Id))
                    .col(text(WhitelistQuestion::Question))
                    .col(string(WhitelistQuestion::FieldType))
                    .col(text_null(WhitelistQuestion::Options))
                    .col(boolean(WhitelistQuestion::Required).default(true))
                    .col(integer(WhitelistQuestion::SortOrder).default(0))
                    .col(timestamp_with_time_zone(WhitelistQuestion::CreatedAt))
                    .col(timestamp_with_time_zone(WhitelistQuestion::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WhitelistQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WhitelistQuestion {
    Table,
    Id,
    Question,
    FieldType,
    Options,
    Required,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
