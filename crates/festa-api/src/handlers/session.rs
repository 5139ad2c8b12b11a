//! Access gate handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Gate status response.
#[derive(Serialize)]
pub struct SessionStatusResponse {
    /// Whether the UI must ask for a PIN before anything else.
    pub pin_required: bool,
}

/// Report whether a PIN is configured.
pub async fn session_status(State(state): State<AppState>) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse {
        pin_required: state.config.upload_pin.is_some(),
    })
}

/// PIN verification request.
#[derive(Deserialize)]
pub struct VerifyPinRequest {
    pub pin: String,
}

/// PIN verification response.
#[derive(Serialize)]
pub struct VerifyPinResponse {
    /// Opaque session token for the Authorization header.
    pub token: String,
}

/// Verify the shared PIN and issue a session token.
///
/// Comparison is exact and case-sensitive. Failures are recoverable with
/// unlimited retries; there is deliberately no rate limiting or lockout.
pub async fn verify_pin(
    State(state): State<AppState>,
    Json(request): Json<VerifyPinRequest>,
) -> ApiResult<Json<VerifyPinResponse>> {
    match &state.config.upload_pin {
        Some(pin) if request.pin == *pin => {
            let token = state.sessions.issue().await;
            info!("PIN verified, session issued");
            Ok(Json(VerifyPinResponse { token }))
        }
        Some(_) => Err(ApiError::unauthorized("Invalid PIN")),
        // Open access: no PIN configured, hand out a token for symmetry.
        None => {
            let token = state.sessions.issue().await;
            Ok(Json(VerifyPinResponse { token }))
        }
    }
}
