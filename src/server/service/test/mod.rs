mod auth;
mod container;
mod form_response;
mod inspection;
mod user;
