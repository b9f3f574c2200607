//! Shared test harness for the whitelist portal backend.
//!
//! Tests run against an in-memory SQLite database whose schema is derived
//! directly from the entity definitions, so no migration step is needed.
//! `TestBuilder` selects the tables a test requires, `TestContext` owns the
//! resulting connection (and a session when asked for one), and the
//! `factory` module seeds rows with sensible defaults.
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn works_against_a_fresh_database() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_whitelist_tables().build().await?;
//!     // test.db is ready to use
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
