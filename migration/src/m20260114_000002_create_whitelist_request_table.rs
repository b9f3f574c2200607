use sea_orm_migration::{prelude::*, schema::*};

use super::m20260114_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WhitelistRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(WhitelistRequest::Id))
                    .col(string(WhitelistRequest::UserId))
                    .col(text(WhitelistRequest::FormData))
                    .col(string(WhitelistRequest::Status))
                    // Uniqueness backs the count-then-insert serial
                    // assignment; colliding inserts fail and retry.
                    .col(string_uniq(WhitelistRequest::SerialNumber))
                    .col(timestamp_with_time_zone(WhitelistRequest::CreatedAt))
                    .col(timestamp_with_time_zone(WhitelistRequest::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_whitelist_request_user")
                            .from(WhitelistRequest::Table, WhitelistRequest::UserId)
                            .to(User::Table, User::DiscordId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_whitelist_request_user_id")
                    .table(WhitelistRequest::Table)
                    .col(WhitelistRequest::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_whitelist_request_created_at")
                    .table(WhitelistRequest::Table)
                    .col(WhitelistRequest::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WhitelistRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WhitelistRequest {
    Table,
    Id,
    UserId,
    FormData,
    Status,
    SerialNumber,
    CreatedAt,
    UpdatedAt,
}
