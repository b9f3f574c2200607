//! Whitelist question management business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::whitelist_question::WhitelistQuestionRepository,
    error::AppError,
    model::question::{
        CreateQuestionParam, QuestionFieldType, ReorderQuestionsParam, UpdateQuestionParam,
        WhitelistQuestion,
    },
};

/// Service providing business logic for the application form's question
/// set.
pub struct QuestionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the question set in display order.
    pub async fn get_all(&self) -> Result<Vec<WhitelistQuestion>, AppError> {
        let repo = WhitelistQuestionRepository::new(self.db);
        repo.get_all().await
    }

    /// Creates a question at the end of the form.
    ///
    /// # Returns
    /// - `Ok(WhitelistQuestion)` - The stored question
    /// - `Err(AppError::BadRequest(_))` - A select question without
    ///   options
    pub async fn create(&self, param: CreateQuestionParam) -> Result<WhitelistQuestion, AppError> {
        validate_options(param.field_type, &param.options)?;

        let repo = WhitelistQuestionRepository::new(self.db);
        let question = repo.create(param).await?;

        tracing::info!("Created whitelist question {}", question.id);

        Ok(question)
    }

    /// Updates a question in place.
    ///
    /// # Returns
    /// - `Ok(WhitelistQuestion)` - The updated question
    /// - `Err(AppError::NotFound(_))` - No question with that id
    /// - `Err(AppError::BadRequest(_))` - A select question without
    ///   options
    pub async fn update(&self, param: UpdateQuestionParam) -> Result<WhitelistQuestion, AppError> {
        validate_options(param.field_type, &param.options)?;

        let repo = WhitelistQuestionRepository::new(self.db);

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))
    }

    /// Deletes a question.
    ///
    /// Requests submitted before the deletion keep their stored answer
    /// document untouched; the form document is opaque to the core.
    ///
    /// # Returns
    /// - `Ok(())` - Question deleted
    /// - `Err(AppError::NotFound(_))` - No question with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = WhitelistQuestionRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Question not found".to_string()));
        }

        tracing::info!("Deleted whitelist question {}", id);

        Ok(())
    }

    /// Persists a new form order from the admin's arrangement.
    ///
    /// # Returns
    /// - `Ok(Vec<WhitelistQuestion>)` - The question set in its new order
    /// - `Err(AppError::BadRequest(_))` - The id list does not match the
    ///   stored question set
    pub async fn reorder(
        &self,
        param: ReorderQuestionsParam,
    ) -> Result<Vec<WhitelistQuestion>, AppError> {
        let repo = WhitelistQuestionRepository::new(self.db);

        let existing = repo.get_all().await?;

        let mut expected: Vec<i32> = existing.iter().map(|q| q.id).collect();
        let mut provided = param.ordered_ids.clone();
        expected.sort_unstable();
        provided.sort_unstable();

        if expected != provided {
            return Err(AppError::BadRequest(
                "Reorder must list every question id exactly once".to_string(),
            ));
        }

        repo.reorder(&param.ordered_ids).await?;

        repo.get_all().await
    }
}

/// A select question needs choices to render; other types must not carry
/// any.
fn validate_options(
    field_type: QuestionFieldType,
    options: &[String],
) -> Result<(), AppError> {
    match field_type {
        QuestionFieldType::Select if options.is_empty() => Err(AppError::BadRequest(
            "Select questions need at least one option".to_string(),
        )),
        QuestionFieldType::Text | QuestionFieldType::Textarea if !options.is_empty() => Err(
            AppError::BadRequest("Only select questions can have options".to_string()),
        ),
        _ => Ok(()),
    }
}
