//! Business logic layer.
//!
//! Services take a borrowed `DatabaseConnection` (and the one-time code store where needed),
//! orchestrate repositories, apply the shared validation rules and return domain models or
//! `AppError`. Controllers own access checks and DTO conversion.

pub mod auth;
pub mod code;
pub mod container;
pub mod form_response;
pub mod inspection;
pub mod password;
pub mod user;

#[cfg(test)]
mod test;
