//! Domain layer - Core entities, collaborator traits and errors

pub mod error;
pub mod qr;
pub mod user;

pub use error::DomainError;
pub use qr::{
    ContentType, CorrectionLevel, GeneratedQrCode, ImageFormat, QrCodeRequest, QrRenderer,
    RenderSpec, RenderedImage,
};
pub use user::{ApiKeyVerification, User, UserId, UserRepository};
