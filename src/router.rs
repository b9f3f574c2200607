use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;

use crate::{
    config::Config,
    controller::{auth, question, user, whitelist},
    error::AppError,
    state::AppState,
};

pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .app_url
                .parse::<HeaderValue>()
                .map_err(|e| AppError::InternalError(format!("Invalid APP_URL: {}", e)))?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    // Per-IP rate limit across the API, generous enough for normal portal
    // use.
    let governor_config = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(20)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let router = Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/whitelist",
            post(whitelist::submit).get(whitelist::list_all),
        )
        .route("/api/whitelist/me", get(whitelist::my_requests))
        .route("/api/whitelist/questions", get(question::get_all))
        .route("/api/whitelist/{id}", get(whitelist::get_by_id))
        .route("/api/whitelist/{id}/status", patch(whitelist::update_status))
        .route("/api/admin/questions", post(question::create))
        .route("/api/admin/questions/reorder", put(question::reorder))
        .route(
            "/api/admin/questions/{id}",
            put(question::update).delete(question::delete),
        )
        .route("/api/admin/users", get(user::get_all))
        .route("/api/admin/users/{discord_id}/admin", put(user::set_admin))
        .layer(GovernorLayer::new(Arc::new(governor_config)))
        .layer(cors);

    Ok(router)
}
