use dioxus_logger::tracing;
use time::Duration;
use tower_sessions::{session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::code::OneTimeCodeService,
};

/// Sessions expire after a week without requests.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Interval between sweeps of expired sessions.
const SESSION_CLEANUP_INTERVAL_SECONDS: u64 = 60;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's SQLite pool.
///
/// Migrates the session table, spawns a background task that deletes expired sessions, and
/// configures cookie expiry on inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the API router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let deletion_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(tokio::time::Duration::from_secs(
                SESSION_CLEANUP_INTERVAL_SECONDS,
            ))
            .await
        {
            tracing::error!("Expired session cleanup stopped: {}", e);
        }
    });

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok(session)
}

/// Logs a first-run setup link when no manager account exists.
///
/// The link carries a fresh setup code from `code_service`; whoever opens it can create the
/// first manager through `/setup`.
///
/// # Returns
/// - `Ok(Some(code))` - No manager exists, setup code generated and logged
/// - `Ok(None)` - A manager already exists
/// - `Err(AppError::DbErr)` - Failed to query users
pub async fn check_for_manager(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
    code_service: &OneTimeCodeService,
) -> Result<Option<String>, AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.manager_exists().await? {
        return Ok(None);
    }

    let code = code_service.generate_setup_code().await;

    tracing::info!(
        "No manager account found. Create one at: {}/setup?code={}",
        config.app_url,
        code
    );

    Ok(Some(code))
}
