pub use sea_orm_migration::prelude::*;

mod m20260114_000001_create_user_table;
mod m20260114_000002_create_whitelist_request_table;
mod m20260116_000003_create_whitelist_question_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260114_000001_create_user_table::Migration),
            Box::new(m20260114_000002_create_whitelist_request_table::Migration),
            Box::new(m20260116_000003_create_whitelist_question_table::Migration),
        ]
    }
}
