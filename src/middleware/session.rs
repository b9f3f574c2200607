//! Type-safe session wrappers.
//!
//! Each struct wraps the underlying `Session` and exposes only the
//! operations of one concern, so session keys and value types live in one
//! place instead of being scattered across handlers.

use tower_sessions::Session;

use crate::{error::AppError, util::parse::parse_u64_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication state of the current session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's Discord id after a successful login.
    ///
    /// The id is stored as a string; session values round-trip through
    /// JSON, which does not preserve full u64 precision.
    pub async fn set_user_id(&self, user_id: u64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Returns the logged-in user's Discord id, if any.
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        Ok(Some(parse_u64_from_string(user_id)?))
    }

    /// Clears the whole session on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF token handling for the OAuth flow.
///
/// A token is stored when the login redirect is issued and taken back out
/// exactly once during the callback, so a token can never be replayed.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Removes and returns the stored token.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
