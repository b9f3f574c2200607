use thiserror::Error;

/// Failures while assembling a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Could not connect to the in-memory database or create its schema.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
