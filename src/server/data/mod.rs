//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed `DatabaseConnection`, use SeaORM entity models internally and
//! return domain models from [`crate::server::model`]. Errors are returned as `DbErr` (or
//! `AppError` where a stored value fails to convert) and mapped to HTTP responses by the
//! service and controller layers.

pub mod container;
pub mod form_response;
pub mod inspection;
pub mod user;

#[cfg(test)]
mod test;
