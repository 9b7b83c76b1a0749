//! QR code generation endpoint

use axum::{extract::State, routing::post, Json, Router};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Query};
use crate::domain::qr::{GeneratedQrCode, QrCodeRequest};

/// Create the QR code router
pub fn create_qr_router() -> Router<AppState> {
    Router::new().route("/generate", post(generate_qr_code))
}

/// Generate a QR code
///
/// POST /qr/generate?contentType=..&content=..&size=..&color=..&correctionLevel=..&format=..
pub async fn generate_qr_code(
    State(state): State<AppState>,
    Query(request): Query<QrCodeRequest>,
) -> Result<Json<GeneratedQrCode>, ApiError> {
    let generated = state.qr_code_service.generate(request).await?;
    Ok(Json(generated))
}
