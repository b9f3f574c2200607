use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::str::FromStr;
use tower_sessions::Session;

use crate::{
    dto::whitelist::{MyWhitelistStatusDto, SubmitWhitelistDto, UpdateStatusDto},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::whitelist::{
        GetAllWhitelistParam, SubmitWhitelistParam, UpdateStatusParam, WhitelistStatus,
    },
    service::{
        discord::{notify::WhitelistNotifyService, role::DiscordRoleService},
        whitelist::WhitelistService,
    },
    state::AppState,
};

/// Query parameters for the admin listing.
#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Optional status filter (`pending`, `approved`, `rejected`).
    pub status: Option<String>,
}

fn default_per_page() -> u64 {
    20
}

/// POST /api/whitelist - Submit a whitelist application
///
/// Validates the answers against the active question set, enforces the
/// lifetime attempt cap and the single-pending rule, assigns a serial
/// number, and stores the request as `pending`.
///
/// # Authentication
/// Requires a logged-in user
///
/// # Returns
/// - `201 Created`: Submission accepted, body carries attempt accounting
/// - `400 Bad Request`: Empty form, missing required answer, attempt cap
///   spent, or a request is already pending
/// - `401 Unauthorized`: No valid session
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<SubmitWhitelistDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let service = WhitelistService::new(&state.db);
    let submission = service
        .submit(SubmitWhitelistParam {
            user_id: user.discord_id,
            form_data: body.form_data,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(submission.into_dto())))
}

/// GET /api/whitelist/me - Get the caller's own requests
///
/// # Authentication
/// Requires a logged-in user
///
/// # Returns
/// - `200 OK`: The caller's requests plus attempt accounting
/// - `401 Unauthorized`: No valid session
pub async fn my_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let service = WhitelistService::new(&state.db);
    let status = service.get_user_status(user.discord_id).await?;

    let dto = MyWhitelistStatusDto {
        requests: status.requests.into_iter().map(|r| r.into_dto()).collect(),
        total_attempts: status.total_attempts,
        remaining_attempts: status.remaining_attempts,
        max_attempts: status.max_attempts,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/whitelist - List requests for the admin dashboard
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: Paginated requests, newest first
/// - `400 Bad Request`: Unknown status filter value
/// - `403 Forbidden`: Caller is not an admin
pub async fn list_all(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let status = params
        .status
        .as_deref()
        .map(WhitelistStatus::from_str)
        .transpose()?;

    let service = WhitelistService::new(&state.db);
    let page = service
        .get_all(GetAllWhitelistParam {
            page: params.page,
            per_page: params.per_page,
            status,
        })
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// GET /api/whitelist/{id} - Get one request for the admin detail view
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: The request
/// - `403 Forbidden`: Caller is not an admin
/// - `404 Not Found`: Unknown request id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let service = WhitelistService::new(&state.db);
    let request = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// PATCH /api/whitelist/{id}/status - Adjudicate a request
///
/// Commits the status change locally, then applies the implied Discord
/// role mutations and DMs the applicant. External failures are reported
/// in the response flags, never rolled back into the stored status.
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: Status committed; flags describe the Discord side effects
/// - `400 Bad Request`: Unknown status value
/// - `403 Forbidden`: Caller is not an admin
/// - `404 Not Found`: Unknown request id
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    session: Session,
    Json(body): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let status = WhitelistStatus::from_str(&body.status)?;

    let service = WhitelistService::new(&state.db);
    let roles = DiscordRoleService::new(state.discord_http.clone(), &state.config);
    let notifier = WhitelistNotifyService::new(state.discord_http.clone());

    let outcome = service
        .update_status(UpdateStatusParam { id, status }, &roles, &notifier)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
