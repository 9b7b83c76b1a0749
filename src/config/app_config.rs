use serde::Deserialize;

use crate::domain::user::{User, UserId};
use crate::infrastructure::services::DEFAULT_LOCATION_PREFIX;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub qr: QrConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

/// Where user records are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Falls back to the `DATABASE_URL` environment variable
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// Users loaded into the in-memory store at startup
    pub seed_credentials: Vec<SeedCredential>,
}

/// A user record declared in configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedCredential {
    pub api_key: String,
    pub user_id: String,
    pub role: String,
}

impl From<SeedCredential> for User {
    fn from(seed: SeedCredential) -> Self {
        User::new(UserId::new(seed.user_id), seed.api_key, seed.role)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Prefix of the location returned for generated images
    pub location_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_url: None,
            max_connections: 5,
            seed_credentials: Vec::new(),
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            location_prefix: DEFAULT_LOCATION_PREFIX.to_string(),
        }
    }
}

impl StorageConfig {
    /// Configured database URL, or `DATABASE_URL` from the environment
    pub fn resolve_database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
    }
}

impl AppConfig {
    /// Layer `config/default`, `config/local` and `APP__*` environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(
            config::Config::builder()
                .add_source(config::File::with_name("config/default").required(false))
                .add_source(config::File::with_name("config/local").required(false))
                .add_source(
                    config::Environment::with_prefix("APP")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    /// Build and deserialize; unknown enum values are errors, never defaults
    pub fn load_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}
