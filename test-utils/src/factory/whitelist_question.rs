//! Factory for whitelist question rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for whitelist questions. Defaults to a required free-text
/// question appended at the end of the form.
pub struct WhitelistQuestionFactory<'a> {
    db: &'a DatabaseConnection,
    question: String,
    field_type: String,
    options: Option<serde_json::Value>,
    required: bool,
    sort_order: i32,
}

impl<'a> WhitelistQuestionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            question: format!("Question {}", id),
            field_type: "text".to_string(),
            options: None,
            required: true,
            sort_order: id as i32,
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    pub fn options(mut self, options: serde_json::Value) -> Self {
        self.options = Some(options);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Inserts the question row and returns the stored entity.
    pub async fn build(self) -> Result<entity::whitelist_question::Model, DbErr> {
        let now = Utc::now();
        entity::whitelist_question::ActiveModel {
            question: ActiveValue::Set(self.question),
            field_type: ActiveValue::Set(self.field_type),
            options: ActiveValue::Set(self.options.map(|o| o.to_string())),
            required: ActiveValue::Set(self.required),
            sort_order: ActiveValue::Set(self.sort_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a required free-text question with default values.
pub async fn create_question(
    db: &DatabaseConnection,
) -> Result<entity::whitelist_question::Model, DbErr> {
    WhitelistQuestionFactory::new(db).build().await
}
