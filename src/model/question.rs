//! Whitelist question domain models and parameters.
//!
//! Questions define the shape of the application form. The submitted
//! answers themselves stay an opaque document; at submission time they are
//! only checked against the required questions active at that moment.

use std::str::FromStr;

use crate::{
    dto::question::WhitelistQuestionDto,
    error::AppError,
};

/// Input widget a question is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFieldType {
    Text,
    Textarea,
    Select,
}

impl QuestionFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }
}

impl FromStr for QuestionFieldType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            "select" => Ok(Self::Select),
            other => Err(AppError::BadRequest(format!(
                "Unknown question type: {}",
                other
            ))),
        }
    }
}

/// One question on the whitelist application form.
#[derive(Debug, Clone, PartialEq)]
pub struct WhitelistQuestion {
    pub id: i32,
    pub question: String,
    pub field_type: QuestionFieldType,
    /// Choices for `select` questions, empty otherwise.
    pub options: Vec<String>,
    pub required: bool,
    pub sort_order: i32,
}

impl WhitelistQuestion {
    /// Converts an entity row into the domain model at the repository
    /// boundary. Unparseable stored values surface as internal errors.
    pub fn from_entity(entity: entity::whitelist_question::Model) -> Result<Self, AppError> {
        let field_type = QuestionFieldType::from_str(&entity.field_type).map_err(|_| {
            AppError::InternalError(format!(
                "Unknown question type '{}' in database",
                entity.field_type
            ))
        })?;

        let options = match entity.options {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::InternalError(format!(
                    "Corrupt options for question {}: {}",
                    entity.id, e
                ))
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            id: entity.id,
            question: entity.question,
            field_type,
            options,
            required: entity.required,
            sort_order: entity.sort_order,
        })
    }

    pub fn into_dto(self) -> WhitelistQuestionDto {
        WhitelistQuestionDto {
            id: self.id,
            question: self.question,
            field_type: self.field_type.as_str().to_string(),
            options: self.options,
            required: self.required,
            sort_order: self.sort_order,
        }
    }
}

/// Parameters for creating a question.
#[derive(Debug, Clone)]
pub struct CreateQuestionParam {
    pub question: String,
    pub field_type: QuestionFieldType,
    pub options: Vec<String>,
    pub required: bool,
}

/// Parameters for updating a question in place.
#[derive(Debug, Clone)]
pub struct UpdateQuestionParam {
    pub id: i32,
    pub question: String,
    pub field_type: QuestionFieldType,
    pub options: Vec<String>,
    pub required: bool,
}

/// Parameters for persisting a new form order.
///
/// The ids are the complete question set in the order the admin arranged
/// them; each question's `sort_order` becomes its position in this list.
#[derive(Debug, Clone)]
pub struct ReorderQuestionsParam {
    pub ordered_ids: Vec<i32>,
}
