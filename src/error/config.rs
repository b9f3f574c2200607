use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set. See `.env.example` for
    /// the full list of required configuration.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but does not parse as the expected
    /// type (e.g. a Discord id that is not numeric).
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
