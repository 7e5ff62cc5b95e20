use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional; absent selects the
///   seeded in-memory store)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 20)
/// - DATABASE_MIGRATIONS_PATH: migrations directory run at start-up (optional)
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub migrations_path: Option<String>,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| {
                anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be a positive integer: {e}")
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            max_connections,
            migrations_path: env::var("DATABASE_MIGRATIONS_PATH").ok(),
        })
    }
}

/// Opens the PostgreSQL pool when a database URL is configured.
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<Option<PgPool>> {
    let Some(url) = settings.url.clone() else {
        tracing::info!("DATABASE_URL not set, using in-memory store");
        return Ok(None);
    };

    let config = DatabaseConfig::new(url).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;

    if let Some(path) = &settings.migrations_path {
        run_migrations(&pool, path).await?;
        tracing::info!("Migrations applied from {path}");
    }

    Ok(Some(pool))
}
