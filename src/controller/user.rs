use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    dto::user::SetAdminDto,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::user::{GetAllUsersParam, SetAdminParam},
    service::user::UserService,
    state::AppState,
};

/// Query parameters for the user listing.
#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}

/// GET /api/admin/users - List portal users
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: Paginated users ordered by name
/// - `403 Forbidden`: Caller is not an admin
pub async fn get_all(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let service = UserService::new(&state.db);
    let users = service
        .get_all_users(GetAllUsersParam {
            page: params.page,
            per_page: params.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// PUT /api/admin/users/{discord_id}/admin - Grant or revoke admin
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `204 No Content`: Flag updated
/// - `403 Forbidden`: Caller is not an admin
/// - `404 Not Found`: Unknown user
pub async fn set_admin(
    State(state): State<AppState>,
    Path(discord_id): Path<u64>,
    session: Session,
    Json(body): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let service = UserService::new(&state.db);
    service
        .set_admin(SetAdminParam {
            discord_id,
            is_admin: body.admin,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
