//! User infrastructure module
//!
//! Implementations of the user store: in-memory for tests and local runs,
//! PostgreSQL for deployments.

mod postgres_repository;
mod repository;

pub use postgres_repository::{connect_pool, PostgresUserRepository};
pub use repository::InMemoryUserRepository;
