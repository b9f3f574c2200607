//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations for each domain in the
//! application. They use SeaORM entity models internally and return domain
//! models, so entity rows never leak past this layer.

pub mod user;
pub mod whitelist_question;
pub mod whitelist_request;

#[cfg(test)]
mod test;
