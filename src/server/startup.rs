use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError};

/// Opens the SQLite connection pool and brings the schema up to date.
///
/// Every pending migration from the `migration` crate is applied before the pool is
/// handed back, so handlers can assume the `customer` and `reservation` tables exist.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool with migrations applied
/// - `Err(AppError::DbErr)` - Connection or migration failure
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Binds the TCP listener the HTTP server accepts connections on.
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to `config.bind_address`
/// - `Err(AppError::Io)` - Address in use or not permitted
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(config.bind_address).await?;

    Ok(listener)
}
