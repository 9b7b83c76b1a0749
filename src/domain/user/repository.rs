//! User repository trait

use async_trait::async_trait;

use super::entity::User;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the user store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the user whose API key equals `api_key` exactly
    async fn get_by_api_key(&self, api_key: &str) -> Result<Option<User>, DomainError>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
