use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    model::user::UpsertUserParam,
    service::{auth::DiscordAuthService, discord::member::DiscordMemberService, user::UserService},
    state::AppState,
    util::parse::parse_u64_from_string,
};

/// Query parameters of the OAuth callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token, must match the value stored in the session.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// GET /api/auth/login - Start the Discord login flow
///
/// Stores a CSRF token in the session and redirects to Discord's
/// authorization page.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(state.http_client, state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// GET /api/auth/callback - Finish the Discord login flow
///
/// Validates the CSRF state, exchanges the code, resolves the Discord
/// identity, derives the admin flag from the configured Discord role, and
/// establishes the session. Redirects back to the portal on success.
///
/// # Returns
/// - `303 See Other`: Login complete, redirect to the portal
/// - `400 Bad Request`: CSRF state mismatch
/// - `500 Internal Server Error`: Token exchange or identity fetch failed
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.0.state).await?;

    let auth_service = DiscordAuthService::new(state.http_client.clone(), state.oauth_client);
    let identity = auth_service.callback(params.0.code).await?;

    let discord_id = parse_u64_from_string(identity.id.clone())?;

    // The admin flag follows the configured Discord role. A failed lookup
    // keeps the stored flag instead of revoking it.
    let member_service = DiscordMemberService::new(state.discord_http.clone(), &state.config);
    let is_admin = match member_service
        .has_role(discord_id, state.config.discord_admin_role_id)
        .await
    {
        Ok(holds_role) => Some(holds_role),
        Err(err) => {
            tracing::warn!("Could not resolve guild roles for {}: {}", discord_id, err);
            None
        }
    };

    let user_service = UserService::new(&state.db);
    let user = user_service
        .login(UpsertUserParam {
            discord_id,
            name: identity.display_name().to_string(),
            is_admin,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.discord_id).await?;

    Ok(Redirect::to(&state.config.app_url))
}

/// GET /api/auth/logout - Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user - Get the logged-in user
///
/// # Returns
/// - `200 OK`: UserDto of the current user
/// - `401 Unauthorized`: No valid session
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(stored) = stored_state {
        if stored == csrf_state {
            return Ok(());
        }
    }

    Err(AuthError::CsrfValidationFailed.into())
}
