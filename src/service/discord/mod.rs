//! Thin wrappers around the Discord REST API.
//!
//! Only the HTTP side of Serenity is used; the portal never opens a
//! gateway connection. Each service wraps the bot-token client with the
//! ids it needs from configuration.

pub mod member;
pub mod notify;
pub mod role;
