use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permissions a route can require beyond plain authentication.
pub enum Permission {
    Admin,
}

/// Resolves the session user and enforces route permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks the required permissions.
    ///
    /// An empty permission slice only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user with all permissions
    /// - `Err(AppError::AuthErr(_))` - Not logged in, user vanished from
    ///   the database, or a permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_discord_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            reason: "admin permission required".to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
