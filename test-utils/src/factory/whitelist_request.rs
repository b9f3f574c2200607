//! Factory for whitelist request rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Datelike, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for whitelist requests.
///
/// The referenced user row must already exist. Defaults to `pending`
/// status, a small answer document, a unique serial number in the current
/// year, and the current time for both timestamps. `created_at` can be
/// overridden to place a row in an earlier calendar year.
pub struct WhitelistRequestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    form_data: serde_json::Value,
    status: String,
    serial_number: String,
    created_at: DateTime<Utc>,
}

impl<'a> WhitelistRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: user_id.into(),
            form_data: serde_json::json!({ "1": format!("answer {}", id) }),
            status: "pending".to_string(),
            serial_number: format!("WL-{}-{:04}", Utc::now().year(), id),
            created_at: Utc::now(),
        }
    }

    pub fn form_data(mut self, form_data: serde_json::Value) -> Self {
        self.form_data = form_data;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the request row and returns the stored entity.
    pub async fn build(self) -> Result<entity::whitelist_request::Model, DbErr> {
        entity::whitelist_request::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            form_data: ActiveValue::Set(self.form_data.to_string()),
            status: ActiveValue::Set(self.status),
            serial_number: ActiveValue::Set(self.serial_number),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending request for the given user.
pub async fn create_request(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::whitelist_request::Model, DbErr> {
    WhitelistRequestFactory::new(db, user_id).build().await
}

/// Creates a request for the given user in the given status.
pub async fn create_request_with_status(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    status: impl Into<String>,
) -> Result<entity::whitelist_request::Model, DbErr> {
    WhitelistRequestFactory::new(db, user_id)
        .status(status)
        .build()
        .await
}
