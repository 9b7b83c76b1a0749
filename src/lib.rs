//! QR Code Gateway API
//!
//! A small HTTP service that:
//! - verifies API keys against a user store (in-memory or PostgreSQL)
//! - generates QR code images in PNG or SVG with configurable size,
//!   color and error-correction level

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::api::state::AppState;
use crate::config::StorageBackend;
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::qr::QrcodeRenderer;
use crate::infrastructure::user::{connect_pool, InMemoryUserRepository, PostgresUserRepository};

/// Resources acquired at startup.
///
/// The database pool, if any, is released by [`AppResources::shutdown`].
pub struct AppResources {
    pub state: AppState,
    pool: Option<PgPool>,
}

impl AppResources {
    /// Close the database pool
    pub async fn shutdown(self) {
        if let Some(pool) = self.pool {
            info!("Closing PostgreSQL connection pool");
            pool.close().await;
        }
    }
}

/// Create the application state with all services initialized
pub async fn create_app_resources(config: &AppConfig) -> anyhow::Result<AppResources> {
    let (user_repository, pool) = create_user_repository(config).await?;

    let state = AppState::new(
        user_repository,
        Arc::new(QrcodeRenderer::new()),
        &config.qr.location_prefix,
    );

    Ok(AppResources { state, pool })
}

async fn create_user_repository(
    config: &AppConfig,
) -> Result<(Arc<dyn UserRepository>, Option<PgPool>), DomainError> {
    info!("Storage backend: {:?}", config.storage.backend);

    match config.storage.backend {
        StorageBackend::Memory => {
            let users: Vec<User> = config
                .storage
                .seed_credentials
                .iter()
                .cloned()
                .map(User::from)
                .collect();

            info!("Using in-memory user store with {} users", users.len());
            Ok((Arc::new(InMemoryUserRepository::with_users(users)), None))
        }
        StorageBackend::Postgres => {
            let database_url = config.storage.resolve_database_url().ok_or_else(|| {
                DomainError::configuration(
                    "storage.database_url or DATABASE_URL is required for the postgres backend",
                )
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = connect_pool(&database_url, config.storage.max_connections).await?;
            info!("PostgreSQL connection established");

            Ok((
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Some(pool),
            ))
        }
    }
}
