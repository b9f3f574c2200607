//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    dto::user::{PaginatedUsersDto, UserDto},
    error::AppError,
    util::parse::parse_u64_from_string,
};

/// Portal user with Discord identity and admin flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord id of the user.
    pub discord_id: u64,
    /// Display name, refreshed at login.
    pub name: String,
    /// Whether the user may use the admin endpoints.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity row into the domain model at the repository
    /// boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted domain model
    /// - `Err(AppError::InternalErr(_))` - The stored Discord id does not
    ///   parse as a u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            admin: entity.admin,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            admin: self.admin,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// Parameters for upserting a user at login.
///
/// `is_admin` as `None` preserves the stored admin flag, so a login where
/// the Discord role lookup failed cannot silently revoke admin access.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: u64,
    pub name: String,
    pub is_admin: Option<bool>,
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone, Copy)]
pub struct GetAllUsersParam {
    pub page: u64,
    pub per_page: u64,
}

/// Parameters for granting or revoking the portal admin flag.
#[derive(Debug, Clone, Copy)]
pub struct SetAdminParam {
    pub discord_id: u64,
    pub is_admin: bool,
}

/// Paginated collection of users for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
