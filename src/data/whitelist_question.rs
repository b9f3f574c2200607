//! Whitelist question repository.
//!
//! Handles the admin-configurable question set behind the application
//! form, including the persisted display order the portal's drag-and-drop
//! arrangement maps onto.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::question::{CreateQuestionParam, UpdateQuestionParam, WhitelistQuestion},
};

/// Repository providing database operations for whitelist questions.
pub struct WhitelistQuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WhitelistQuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new question at the end of the form.
    ///
    /// The sort order is set to the current question count, which places
    /// the new question after every existing one.
    ///
    /// # Arguments
    /// - `param` - Prompt, field type, options, and required flag
    ///
    /// # Returns
    /// - `Ok(WhitelistQuestion)` - The stored question
    /// - `Err(AppError::DbErr(_))` - Database error during insert
    pub async fn create(&self, param: CreateQuestionParam) -> Result<WhitelistQuestion, AppError> {
        let position = entity::prelude::WhitelistQuestion::find()
            .count(self.db)
            .await?;

        let now = Utc::now();

        let entity = entity::whitelist_question::ActiveModel {
            question: ActiveValue::Set(param.question),
            field_type: ActiveValue::Set(param.field_type.as_str().to_string()),
            options: ActiveValue::Set(serialize_options(&param.options)),
            required: ActiveValue::Set(param.required),
            sort_order: ActiveValue::Set(position as i32),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        WhitelistQuestion::from_entity(entity)
    }

    /// Rewrites a question in place, keeping its position.
    ///
    /// # Returns
    /// - `Ok(Some(WhitelistQuestion))` - The updated question
    /// - `Ok(None)` - No question with that id
    /// - `Err(AppError::DbErr(_))` - Database error during update
    pub async fn update(
        &self,
        param: UpdateQuestionParam,
    ) -> Result<Option<WhitelistQuestion>, AppError> {
        let Some(existing) = entity::prelude::WhitelistQuestion::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::whitelist_question::ActiveModel = existing.into();
        active.question = ActiveValue::Set(param.question);
        active.field_type = ActiveValue::Set(param.field_type.as_str().to_string());
        active.options = ActiveValue::Set(serialize_options(&param.options));
        active.required = ActiveValue::Set(param.required);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(WhitelistQuestion::from_entity(updated)?))
    }

    /// Deletes a question.
    ///
    /// # Returns
    /// - `Ok(true)` - Question deleted
    /// - `Ok(false)` - No question with that id
    /// - `Err(AppError::DbErr(_))` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::WhitelistQuestion::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns every question in display order.
    ///
    /// Ties on sort order break by id, so freshly created questions keep a
    /// stable position before the first reorder.
    ///
    /// # Returns
    /// - `Ok(Vec<WhitelistQuestion>)` - All questions in form order
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<WhitelistQuestion>, AppError> {
        let entities = entity::prelude::WhitelistQuestion::find()
            .order_by_asc(entity::whitelist_question::Column::SortOrder)
            .order_by_asc(entity::whitelist_question::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(WhitelistQuestion::from_entity)
            .collect()
    }

    /// Persists a new display order.
    ///
    /// Each id's sort order becomes its position in the given list. Ids
    /// not present in the list keep their old sort order.
    ///
    /// # Arguments
    /// - `ordered_ids` - Question ids in their new display order
    ///
    /// # Returns
    /// - `Ok(())` - Order persisted
    /// - `Err(AppError::DbErr(_))` - Database error during update
    pub async fn reorder(&self, ordered_ids: &[i32]) -> Result<(), AppError> {
        for (position, id) in ordered_ids.iter().enumerate() {
            entity::prelude::WhitelistQuestion::update_many()
                .filter(entity::whitelist_question::Column::Id.eq(*id))
                .col_expr(
                    entity::whitelist_question::Column::SortOrder,
                    sea_orm::sea_query::Expr::value(position as i32),
                )
                .exec(self.db)
                .await?;
        }

        Ok(())
    }
}

/// Serializes the option list for storage; questions without options store
/// NULL rather than an empty array.
fn serialize_options(options: &[String]) -> Option<String> {
    if options.is_empty() {
        None
    } else {
        Some(serde_json::json!(options).to_string())
    }
}
