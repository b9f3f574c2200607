//! User data repository.
//!
//! Manages portal user records: upsert at login, lookups, admin flag
//! management, and paginated listing for the admin dashboard.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user at login.
    ///
    /// Inserts a new user, or refreshes an existing user's name and login
    /// timestamp. The admin column is only written when `is_admin` is
    /// `Some`, so a login where the Discord role lookup failed leaves the
    /// stored flag untouched.
    ///
    /// # Arguments
    /// - `param` - Discord id, display name, and optional admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr(_))` - Database error during upsert
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::LastLoginAt,
        ];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that Discord id
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks whether any admin user exists.
    ///
    /// Used during startup to log a setup hint when the portal has no
    /// admin yet.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(AppError::DbErr(_))` - Database error during count
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Returns users for the admin dashboard, ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Users per page
    ///
    /// # Returns
    /// - `Ok((users, total, total_pages))` - Users for the page, the
    ///   total user count, and the page count
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, counts.number_of_items, counts.number_of_pages))
    }

    /// Returns all admin users, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All admins, empty when none exist
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn get_all_admins(&self) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Sets the admin flag for a user.
    ///
    /// # Arguments
    /// - `discord_id` - Discord id of the user
    /// - `is_admin` - Whether the user should have admin privileges
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated (or no matching user found)
    /// - `Err(AppError::DbErr(_))` - Database error during update
    pub async fn set_admin(&self, discord_id: u64, is_admin: bool) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .col_expr(
                entity::user::Column::Admin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
