//! HTTP request handlers.
//!
//! Each handler checks access through [`AuthGuard`](super::middleware::auth::AuthGuard),
//! delegates to a service and converts the returned domain model into a DTO.

pub mod auth;
pub mod container;
pub mod form_response;
pub mod inspection;
pub mod user;
