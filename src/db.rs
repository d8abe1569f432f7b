use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::config::Config;

const PRAGMAS: &[&str] = &["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"];

pub async fn connect_and_migrate(config: &Config) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.database_url.clone());
    // Every connection to `sqlite::memory:` gets its own database.
    let max_connections = if config.is_in_memory() { 1 } else { config.db_max_connections.max(1) };
    opts.max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;

    if !config.is_in_memory() {
        for pragma in PRAGMAS {
            db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string()))
                .await?;
        }
    }

    Migrator::up(&db, None).await?;
    tracing::debug!(url = %config.database_url, "database ready");

    Ok(db)
}
