use business::domain::errors::RepositoryError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 20,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to PostgreSQL: {}", e);
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!("Migrations directory not found: {}", migrations_path);
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!("Migration failed: {}", e);
            DatabaseError::MigrationError
        })
}

/// Maps a PostgreSQL SQLSTATE code onto the repository error it represents.
pub fn map_sqlstate(code: Option<&str>) -> RepositoryError {
    match code {
        Some("23505") => RepositoryError::Duplicated,
        Some("23503") => RepositoryError::InvalidReference,
        Some("23502") => RepositoryError::MissingField,
        Some("22P02") => RepositoryError::InvalidFormat,
        _ => RepositoryError::DatabaseError,
    }
}

pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_error) => {
            let mapped = map_sqlstate(db_error.code().as_deref());
            if mapped == RepositoryError::DatabaseError {
                tracing::error!("Unexpected database error: {}", db_error);
            }
            mapped
        }
        other => {
            tracing::error!("Database failure: {}", other);
            RepositoryError::DatabaseError
        }
    }
}

/// Converts a stored non-negative integer column into a count.
pub(crate) fn to_count(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

pub(crate) fn to_column(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_constraint_violations() {
        assert_eq!(map_sqlstate(Some("23505")), RepositoryError::Duplicated);
        assert_eq!(map_sqlstate(Some("23503")), RepositoryError::InvalidReference);
        assert_eq!(map_sqlstate(Some("23502")), RepositoryError::MissingField);
        assert_eq!(map_sqlstate(Some("22P02")), RepositoryError::InvalidFormat);
    }

    #[test]
    fn should_fall_back_to_database_error() {
        assert_eq!(map_sqlstate(Some("40001")), RepositoryError::DatabaseError);
        assert_eq!(map_sqlstate(None), RepositoryError::DatabaseError);
    }

    #[test]
    fn should_map_missing_row_to_not_found() {
        assert_eq!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        );
    }

    #[test]
    fn should_map_pool_timeout_to_database_error() {
        assert_eq!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        );
    }

    #[test]
    fn should_default_to_twenty_connections() {
        let config = DatabaseConfig::new("postgres://localhost/storefront".to_string());
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.with_max_connections(5).max_connections, 5);
    }

    #[test]
    fn should_clamp_integer_columns() {
        assert_eq!(to_count(-3), 0);
        assert_eq!(to_count(7), 7);
        assert_eq!(to_column(u32::MAX), i32::MAX);
    }
}
