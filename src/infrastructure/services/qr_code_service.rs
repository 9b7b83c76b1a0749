//! QR code generation service

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::qr::{GeneratedQrCode, QrCodeRequest, QrRenderer, RenderSpec, RenderedImage};
use crate::domain::DomainError;

/// Default prefix of the location returned for generated images
pub const DEFAULT_LOCATION_PREFIX: &str = "/path/to/qr";

/// Generates QR code images and describes where they can be found.
///
/// Images are rendered into memory only; the returned location is a
/// synthesized path, not a stored resource.
#[derive(Clone)]
pub struct QrCodeService {
    renderer: Arc<dyn QrRenderer>,
    location_prefix: String,
}

impl std::fmt::Debug for QrCodeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrCodeService")
            .field("location_prefix", &self.location_prefix)
            .finish_non_exhaustive()
    }
}

impl QrCodeService {
    pub fn new(renderer: Arc<dyn QrRenderer>) -> Self {
        Self {
            renderer,
            location_prefix: DEFAULT_LOCATION_PREFIX.to_string(),
        }
    }

    /// Use a different location prefix
    pub fn with_location_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.location_prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    pub fn location_prefix(&self) -> &str {
        &self.location_prefix
    }

    /// Render the image for a request without minting an identifier
    pub fn render(&self, request: &QrCodeRequest) -> Result<RenderedImage, DomainError> {
        debug!(
            content_type = ?request.content_type,
            size = request.size,
            correction_level = ?request.correction_level,
            format = ?request.format,
            "Rendering QR code"
        );

        self.renderer.render(&RenderSpec::from_request(request))
    }

    /// Generate a QR code and return its identifier and location
    pub async fn generate(&self, request: QrCodeRequest) -> Result<GeneratedQrCode, DomainError> {
        let service = self.clone();
        let image = tokio::task::spawn_blocking(move || service.render(&request))
            .await
            .map_err(|e| DomainError::internal(format!("Render task failed: {}", e)))??;

        let id = Uuid::new_v4().to_string();
        let location = self.location_for(&id, &image);

        info!(
            qr_code_id = %id,
            format = image.format.extension(),
            bytes = image.bytes.len(),
            "QR code generated"
        );

        Ok(GeneratedQrCode::success(id, location))
    }

    fn location_for(&self, id: &str, image: &RenderedImage) -> String {
        format!(
            "{}/{}.{}",
            self.location_prefix,
            id,
            image.format.extension()
        )
    }
}
