use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for in-memory SQLite test environments.
///
/// Collects CREATE TABLE statements derived from entity definitions and
/// materializes them into a `TestContext` on `build()`. Tables with foreign
/// keys must be added after the tables they reference.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table backing the given entity to the test schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the whitelist workflow touches: users, requests,
    /// and questions, in dependency order.
    pub fn with_whitelist_tables(self) -> Self {
        self.with_table(User)
            .with_table(WhitelistRequest)
            .with_table(WhitelistQuestion)
    }

    /// Connects to a fresh in-memory database and creates the configured
    /// tables in the order they were added.
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::create(self.tables).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
