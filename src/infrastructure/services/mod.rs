//! Infrastructure services

mod qr_code_service;
mod verification_service;

pub use qr_code_service::{QrCodeService, DEFAULT_LOCATION_PREFIX};
pub use verification_service::ApiKeyVerificationService;
