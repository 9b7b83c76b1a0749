//! Infrastructure layer - Implementations of domain traits and services

pub mod logging;
pub mod qr;
pub mod services;
pub mod user;

pub use qr::QrcodeRenderer;
pub use services::{ApiKeyVerificationService, QrCodeService};
pub use user::{InMemoryUserRepository, PostgresUserRepository};
