//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository.
///
/// Expects a `users` table with `id`, `api_key` and `role` columns.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get_by_api_key(&self, api_key: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, api_key, role::text AS role
            FROM users
            WHERE api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by API key: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database unreachable: {}", e)))?;

        Ok(())
    }
}

/// Open a connection pool. The caller owns the pool and closes it on shutdown.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Invalid user id in database: {}", e)))?;
    let api_key: String = row
        .try_get("api_key")
        .map_err(|e| DomainError::storage(format!("Invalid API key in database: {}", e)))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| DomainError::storage(format!("Invalid role in database: {}", e)))?;

    Ok(User::new(UserId::new(id), api_key, role))
}
