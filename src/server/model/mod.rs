//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs at
//! the controller boundary. Parameter types carry already-validated input into the data layer.

pub mod container;
pub mod form_response;
pub mod inspection;
pub mod user;
