//! QR renderer collaborator

use super::entity::{CorrectionLevel, ImageFormat, MODULE_SCALE_DIVISOR, QrCodeRequest};
use crate::domain::DomainError;

/// Everything the renderer needs, derived from a [`QrCodeRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpec {
    pub content: String,
    /// Pixel width of one module; zero or negative cannot be rendered
    pub module_scale: i64,
    pub color: String,
    pub correction_level: CorrectionLevel,
    pub format: ImageFormat,
}

impl RenderSpec {
    /// Derive render parameters. The content type is deliberately dropped.
    pub fn from_request(request: &QrCodeRequest) -> Self {
        Self {
            content: request.content.clone(),
            module_scale: module_scale(request.size),
            color: request.color.clone(),
            correction_level: request.correction_level,
            format: request.format,
        }
    }
}

/// Floor division of the requested pixel size into a module scale
pub fn module_scale(size: i64) -> i64 {
    size.div_euclid(MODULE_SCALE_DIVISOR)
}

/// Serialized image produced by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// Encodes content into a QR symbol and serializes it as an image
pub trait QrRenderer: Send + Sync {
    fn render(&self, spec: &RenderSpec) -> Result<RenderedImage, DomainError>;
}
