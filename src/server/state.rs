//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's state
//! extraction. All fields are cheap to clone: the database is a pool and the code service
//! keeps its store behind an `Arc`.

use sea_orm::DatabaseConnection;

use super::service::code::OneTimeCodeService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// In-memory store of one-time login codes, reset tokens and the setup code.
    pub code_service: OneTimeCodeService,

    /// Application base URL without trailing slash, used to build container form links.
    pub app_url: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, code_service: OneTimeCodeService, app_url: String) -> Self {
        Self {
            db,
            code_service,
            app_url,
        }
    }
}
