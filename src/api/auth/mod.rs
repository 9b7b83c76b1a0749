//! API key verification endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Query};
use crate::domain::user::ApiKeyVerification;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/verify", post(verify_api_key))
}

/// Query parameters for key verification
#[derive(Debug, Deserialize)]
pub struct VerifyApiKeyParams {
    pub api_key: String,
}

/// Verify an API key
///
/// POST /auth/verify?api_key=...
///
/// An unknown key is a normal response with `is_valid: false`, not an error.
pub async fn verify_api_key(
    State(state): State<AppState>,
    Query(params): Query<VerifyApiKeyParams>,
) -> Result<Json<ApiKeyVerification>, ApiError> {
    let verification = state.verification_service.verify(&params.api_key).await?;
    Ok(Json(verification))
}
