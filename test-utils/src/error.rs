use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The session store table could not be created.
    #[error("Failed to prepare session store: {0}")]
    SessionStore(String),

    /// A resource was read from the context before it was initialized.
    #[error("Test context has no {0}")]
    NotInitialized(&'static str),
}
