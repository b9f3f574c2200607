//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned cheaply for each request via
//! Axum's state extraction: the database handle is a pool, the HTTP and
//! Discord clients are reference counted, and the config is a plain clone.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::config::Config;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for Discord REST calls made outside the bot token
    /// (OAuth token exchange, identity fetch). Redirects are disabled.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord login flow.
    pub oauth_client: OAuth2Client,

    /// Discord HTTP client authenticated with the bot token, used for
    /// role mutations and direct messages.
    pub discord_http: Arc<Http>,

    /// Environment configuration (guild and role ids, URLs).
    pub config: Config,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        config: Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            config,
        }
    }
}
