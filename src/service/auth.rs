//! OAuth2 login with Discord.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use serde::Deserialize;
use url::Url;

use crate::{error::AppError, state::OAuth2Client};

const DISCORD_API_USER_URL: &str = "https://discord.com/api/users/@me";

/// Identity payload returned by Discord for the `identify` scope.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordIdentity {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
}

impl DiscordIdentity {
    /// Preferred display name: the global display name when set, the
    /// username otherwise.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

pub struct DiscordAuthService {
    http_client: reqwest::Client,
    oauth_client: OAuth2Client,
}

impl DiscordAuthService {
    pub fn new(http_client: reqwest::Client, oauth_client: OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Builds the Discord authorization URL with a fresh CSRF token.
    ///
    /// The token must be stored in the session and compared during the
    /// callback.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Exchanges the callback code for a token and resolves the Discord
    /// identity behind it.
    ///
    /// # Returns
    /// - `Ok(DiscordIdentity)` - Identity of the logging-in user
    /// - `Err(AppError)` - Token exchange or identity fetch failed
    pub async fn callback(&self, code: String) -> Result<DiscordIdentity, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http_client)
            .await
            .map_err(|e| AppError::InternalError(format!("Discord token exchange failed: {}", e)))?;

        let identity = self
            .http_client
            .get(DISCORD_API_USER_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordIdentity>()
            .await?;

        Ok(identity)
    }
}
