#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod container;

#[cfg(feature = "web")]
pub mod form_response;

#[cfg(feature = "web")]
pub mod inspection;

#[cfg(feature = "web")]
pub mod user;
