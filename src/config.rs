use crate::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub discord_guild_id: u64,
    pub discord_admin_role_id: u64,
    pub discord_whitelisted_role_id: u64,
    pub discord_waiting_role_id: u64,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            app_url: require("APP_URL")?,
            discord_client_id: require("DISCORD_CLIENT_ID")?,
            discord_client_secret: require("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require("DISCORD_REDIRECT_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            discord_guild_id: require_u64("DISCORD_GUILD_ID")?,
            discord_admin_role_id: require_u64("DISCORD_ADMIN_ROLE_ID")?,
            discord_whitelisted_role_id: require_u64("DISCORD_WHITELISTED_ROLE_ID")?,
            discord_waiting_role_id: require_u64("DISCORD_WAITING_ROLE_ID")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn require_u64(name: &str) -> Result<u64, ConfigError> {
    require(name)?
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()))
}
