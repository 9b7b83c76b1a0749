//! API key verification service

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::user::{ApiKeyVerification, UserRepository};
use crate::domain::DomainError;

/// Verifies presented API keys against the user store.
///
/// A matching record is always valid; there is no expiry or status check.
#[derive(Clone)]
pub struct ApiKeyVerificationService {
    repository: Arc<dyn UserRepository>,
}

impl std::fmt::Debug for ApiKeyVerificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyVerificationService").finish_non_exhaustive()
    }
}

impl ApiKeyVerificationService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Look up the key and report whether it belongs to a user
    pub async fn verify(&self, api_key: &str) -> Result<ApiKeyVerification, DomainError> {
        let user = self.repository.get_by_api_key(api_key).await?;

        match &user {
            Some(user) => debug!(user_id = %user.id(), "API key verified"),
            None => warn!("API key verification failed: no matching user"),
        }

        Ok(ApiKeyVerification::from(user))
    }

    /// Check that the user store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}
