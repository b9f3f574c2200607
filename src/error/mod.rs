//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type aggregating domain errors and
//! infrastructure failures, with an `IntoResponse` implementation so
//! handlers can return `Result<_, AppError>` directly. Domain errors
//! (`AuthError`, `WhitelistError`) map to their own status codes; anything
//! unexpected is logged server-side and answered with a generic 500 body.

pub mod auth;
pub mod config;
pub mod internal;
pub mod whitelist;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    dto::api::ErrorDto,
    error::{auth::AuthError, config::ConfigError, whitelist::WhitelistError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error. Delegates to
    /// `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Whitelist business-rule violation. Delegates to
    /// `WhitelistError::into_response()` for status code mapping.
    #[error(transparent)]
    WhitelistErr(#[from] WhitelistError),

    /// Unexpected internal state indicating a bug, such as an id column
    /// that no longer parses.
    #[error(transparent)]
    InternalErr(#[from] internal::InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Resource not found; results in 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request; results in 400 with the given message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with a message that is logged but never returned
    /// to the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::WhitelistErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper turning any displayable error into a 500 response.
///
/// The full error is logged server-side; the client only ever sees a
/// generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
