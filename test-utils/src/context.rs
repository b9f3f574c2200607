use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Live test environment.
///
/// Owns a connection to an in-memory SQLite database with the requested
/// tables already created. A session backed by the same database can be
/// created on demand for tests that exercise authentication.
pub struct TestContext {
    pub db: DatabaseConnection,
    session: Option<Session>,
}

impl TestContext {
    pub(crate) async fn create(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for stmt in tables {
            db.execute(&stmt).await?;
        }

        Ok(Self { db, session: None })
    }

    /// Returns a session backed by the test database.
    ///
    /// The session store table is created on first use; subsequent calls
    /// return the same session instance.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.db.get_sqlite_connection_pool();
            let store = SqliteStore::new(pool.clone());

            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        Ok(self.session.as_ref().expect("session initialized above"))
    }
}
