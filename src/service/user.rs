//! User management business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers, SetAdminParam, UpsertUserParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a login, creating the user on first contact.
    ///
    /// # Arguments
    /// - `param` - Discord identity and the admin flag resolved from the
    ///   configured Discord role (`None` when the lookup failed)
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::DbErr(_))` - Database error during upsert
    pub async fn login(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.upsert(param).await?;

        tracing::info!("User {} ({}) logged in", user.name, user.discord_id);

        Ok(user)
    }

    /// Retrieves all users with pagination for the admin dashboard.
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total, total_pages) = user_repo
            .get_all_paginated(param.page, param.per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Grants or revokes the portal admin flag.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated
    /// - `Err(AppError::NotFound(_))` - No user with that Discord id
    /// - `Err(AppError::DbErr(_))` - Database error during update
    pub async fn set_admin(&self, param: SetAdminParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_discord_id(param.discord_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        user_repo.set_admin(param.discord_id, param.is_admin).await?;

        tracing::info!(
            "Admin flag for user {} set to {}",
            param.discord_id,
            param.is_admin
        );

        Ok(())
    }
}
