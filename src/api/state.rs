//! Application state for shared services

use std::sync::Arc;

use crate::domain::qr::{GeneratedQrCode, QrCodeRequest, QrRenderer};
use crate::domain::user::{ApiKeyVerification, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::services::{ApiKeyVerificationService, QrCodeService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub verification_service: Arc<dyn VerificationServiceTrait>,
    pub qr_code_service: Arc<dyn QrCodeServiceTrait>,
}

impl AppState {
    /// Wire the default services around a user store and a renderer
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        renderer: Arc<dyn QrRenderer>,
        location_prefix: &str,
    ) -> Self {
        Self {
            verification_service: Arc::new(ApiKeyVerificationService::new(user_repository)),
            qr_code_service: Arc::new(
                QrCodeService::new(renderer).with_location_prefix(location_prefix),
            ),
        }
    }
}

/// Trait for API key verification
#[async_trait::async_trait]
pub trait VerificationServiceTrait: Send + Sync {
    async fn verify(&self, api_key: &str) -> Result<ApiKeyVerification, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}

/// Trait for QR code generation
#[async_trait::async_trait]
pub trait QrCodeServiceTrait: Send + Sync {
    async fn generate(&self, request: QrCodeRequest) -> Result<GeneratedQrCode, DomainError>;
}

#[async_trait::async_trait]
impl VerificationServiceTrait for ApiKeyVerificationService {
    async fn verify(&self, api_key: &str) -> Result<ApiKeyVerification, DomainError> {
        ApiKeyVerificationService::verify(self, api_key).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        ApiKeyVerificationService::ping(self).await
    }
}

#[async_trait::async_trait]
impl QrCodeServiceTrait for QrCodeService {
    async fn generate(&self, request: QrCodeRequest) -> Result<GeneratedQrCode, DomainError> {
        QrCodeService::generate(self, request).await
    }
}
