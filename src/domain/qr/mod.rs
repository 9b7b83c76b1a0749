//! QR code domain
//!
//! Request/result types for QR generation and the renderer trait the
//! encoding library sits behind.

mod entity;
mod renderer;

pub use entity::{
    BORDER_MODULES, ContentType, CorrectionLevel, GENERATED_MESSAGE, GeneratedQrCode, ImageFormat,
    MODULE_SCALE_DIVISOR, ParseParamError, QrCodeRequest,
};
pub use renderer::{QrRenderer, RenderSpec, RenderedImage, module_scale};
