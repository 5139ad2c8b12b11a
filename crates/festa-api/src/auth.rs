//! Shared-PIN access gate.
//!
//! When a PIN is configured, every flow route requires a session token
//! issued by the PIN check. Tokens live in process memory for the lifetime
//! of the server and are never expired automatically.

use std::collections::HashSet;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// In-memory store of verified session tokens.
#[derive(Default)]
pub struct SessionStore {
    tokens: RwLock<HashSet<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh opaque token and remember it as verified.
    pub async fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.write().await.insert(token.clone());
        token
    }

    /// Check whether a token was issued by this process.
    pub async fn contains(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }
}

/// Extractor proving the request may use the gated flows.
///
/// With no PIN configured the gate admits every request. Otherwise the
/// request must carry a Bearer token previously issued by the PIN check.
#[derive(Debug, Clone, Copy)]
pub struct AccessSession;

#[axum::async_trait]
impl FromRequestParts<AppState> for AccessSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.config.upload_pin.is_none() {
            return Ok(Self);
        }

        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header format"))?;

        if state.sessions.contains(token).await {
            Ok(Self)
        } else {
            Err(ApiError::unauthorized("Invalid session token"))
        }
    }
}
