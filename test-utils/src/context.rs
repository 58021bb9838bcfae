use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Inactivity window of test sessions. Matches the server's session layer.
pub const SESSION_INACTIVITY_DAYS: i64 = 7;

/// In-memory SQLite database plus a session stored in that same database.
///
/// Mirrors what a request handler sees at runtime: a `DatabaseConnection` for repositories and
/// a `Session` that `AuthSession` writes the signed-in user's id into. Both are created on
/// first use and live as long as the context.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database, connecting to a fresh `sqlite::memory:` instance on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection shared by every later call
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db.as_ref().ok_or(TestError::NotInitialized("database"))
    }

    /// Runs the schema statements collected by `TestBuilder`, in order.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements, parents before the tables referencing them
    ///
    /// # Returns
    /// - `Ok(())` - Every table exists
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the session, creating the sqlx session table on first call.
    ///
    /// The session expires after [`SESSION_INACTIVITY_DAYS`] without activity, as in the
    /// server. Signing a user in goes through `AuthSession::set_user_id` on the returned value.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session shared by every later call
    /// - `Err(TestError::Database)` - The database could not be opened
    /// - `Err(TestError::SessionStore)` - The session table could not be created
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();
            let store = SqliteStore::new(pool);
            store
                .migrate()
                .await
                .map_err(|e| TestError::SessionStore(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
            ));
        }

        self.session.as_ref().ok_or(TestError::NotInitialized("session"))
    }

    /// Database and session together, for guard and controller-level tests that need both
    /// borrowed at once.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - Both initialized
    /// - `Err(TestError)` - Either could not be created
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        let db = self.db.as_ref().ok_or(TestError::NotInitialized("database"))?;
        let session = self
            .session
            .as_ref()
            .ok_or(TestError::NotInitialized("session"))?;

        Ok((db, session))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
