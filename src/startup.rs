use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    state::OAuth2Client,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// The schema must be current before anything else touches the database,
/// so this runs to completion before the router is built.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application database pool.
///
/// Sessions are stored in their own table and expire after seven days of
/// inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// HTTP client for external API requests.
///
/// Redirects are disabled so a redirecting response cannot steer a request
/// at an unexpected host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// OAuth2 client for the Discord login flow.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    let invalid_url = |e: url::ParseError| AppError::InternalError(format!("Invalid URL: {}", e));

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(invalid_url)?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone()).map_err(invalid_url)?)
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(invalid_url)?,
        );

    Ok(client)
}

/// Discord HTTP client authenticated with the bot token.
///
/// Only the REST side of Serenity is used; the portal never opens a
/// gateway connection.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_bot_token))
}

/// Logs a hint when the database holds no admin user yet.
///
/// Admin status is derived from the configured Discord admin role at
/// login, so the fix is to log in once with that role.
pub async fn check_for_admin(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if !user_repo.admin_exists().await? {
        tracing::warn!(
            "No admin user exists yet; the first login holding the configured \
             Discord admin role will become one"
        );
    }

    Ok(())
}
