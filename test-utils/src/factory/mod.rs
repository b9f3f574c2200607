//! Entity factories for seeding test data.
//!
//! Each factory inserts one row with defaults that satisfy the schema, and
//! exposes a builder interface for the fields a test cares about.

pub mod helpers;
pub mod user;
pub mod whitelist_question;
pub mod whitelist_request;
