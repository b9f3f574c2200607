use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

/// Business-rule violations of the whitelist workflow.
///
/// Messages are user-facing and shown verbatim in the portal, which is why
/// they are in Czech like the rest of the community-facing surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhitelistError {
    /// The lifetime submission cap is used up. Never resets.
    #[error("Dosáhli jste maximálního počtu pokusů ({0}).")]
    MaxAttemptsReached(u32),

    /// The account already has a request waiting for review.
    #[error("Již máte aktivní žádost o whitelist.")]
    ActiveRequestExists,

    /// The submitted form document is missing or empty.
    #[error("Žádost neobsahuje žádná data formuláře.")]
    EmptyForm,

    /// A required question has no answer in the submitted document.
    #[error("Chybí odpověď na povinnou otázku: {0}")]
    MissingAnswer(String),

    /// A status-update request carried an unknown status value.
    #[error("Neplatný stav žádosti: {0}")]
    InvalidStatus(String),

    /// Serial allocation kept colliding after the retry budget ran out.
    /// Surfaced as a 500 so the user retries the whole submission.
    #[error("Failed to allocate a unique whitelist serial number after {0} attempts")]
    SerialAllocation(u32),
}

impl IntoResponse for WhitelistError {
    fn into_response(self) -> Response {
        match self {
            Self::SerialAllocation(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
