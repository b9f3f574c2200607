//! HTTP request handlers.
//!
//! Handlers validate access through `AuthGuard`, convert DTOs into
//! parameter models, call into the service layer, and convert the result
//! back into a DTO.

pub mod auth;
pub mod question;
pub mod user;
pub mod whitelist;
