use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::str::FromStr;
use tower_sessions::Session;

use crate::{
    dto::question::{CreateQuestionDto, ReorderQuestionsDto, UpdateQuestionDto},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::question::{
        CreateQuestionParam, QuestionFieldType, ReorderQuestionsParam, UpdateQuestionParam,
    },
    service::question::QuestionService,
    state::AppState,
};

/// GET /api/whitelist/questions - Get the application form's questions
///
/// Public; the portal renders the application form from this list.
///
/// # Returns
/// - `200 OK`: Questions in display order
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = QuestionService::new(&state.db);
    let questions = service.get_all().await?;

    let dtos: Vec<_> = questions.into_iter().map(|q| q.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/admin/questions - Create a question
///
/// The new question is appended at the end of the form.
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `201 Created`: The stored question
/// - `400 Bad Request`: Unknown field type, or invalid options for the
///   type
/// - `403 Forbidden`: Caller is not an admin
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let service = QuestionService::new(&state.db);
    let question = service
        .create(CreateQuestionParam {
            question: body.question,
            field_type: QuestionFieldType::from_str(&body.field_type)?,
            options: body.options,
            required: body.required,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(question.into_dto())))
}

/// PUT /api/admin/questions/{id} - Update a question
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: The updated question
/// - `400 Bad Request`: Unknown field type, or invalid options for the
///   type
/// - `403 Forbidden`: Caller is not an admin
/// - `404 Not Found`: Unknown question id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    session: Session,
    Json(body): Json<UpdateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let service = QuestionService::new(&state.db);
    let question = service
        .update(UpdateQuestionParam {
            id,
            question: body.question,
            field_type: QuestionFieldType::from_str(&body.field_type)?,
            options: body.options,
            required: body.required,
        })
        .await?;

    Ok((StatusCode::OK, Json(question.into_dto())))
}

/// DELETE /api/admin/questions/{id} - Delete a question
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `204 No Content`: Question deleted
/// - `403 Forbidden`: Caller is not an admin
/// - `404 Not Found`: Unknown question id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let service = QuestionService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/admin/questions/reorder - Persist a new form order
///
/// The body lists every question id in the order the admin arranged them.
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: The question set in its new order
/// - `400 Bad Request`: The id list does not match the stored set
/// - `403 Forbidden`: Caller is not an admin
pub async fn reorder(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<ReorderQuestionsDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let service = QuestionService::new(&state.db);
    let questions = service
        .reorder(ReorderQuestionsParam {
            ordered_ids: body.ordered_ids,
        })
        .await?;

    let dtos: Vec<_> = questions.into_iter().map(|q| q.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
