use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

// POST /api/auth/magic/request
#[derive(Deserialize)]
pub struct MagicLinkRequest {
    pub email: String,
}

pub async fn request_magic(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MagicLinkRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let email = body.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }

    let requested = state
        .accounts
        .request_magic_link(email)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "magic link request failed");
            AppError::Backend(e.to_string())
        })?;

    Ok(Json(serde_json::json!({
        "ok": true,
        "message": requested.message,
        "demo_token": requested.demo_token,
        "expires_in_minutes": requested.expires_in_minutes,
    })))
}

// POST /api/auth/magic/verify
#[derive(Deserialize)]
pub struct VerifyRequest {
    pub token: String,
    /// When present, the stalled wizard in this session is woken with the
    /// verified identity.
    pub session_id: Option<Uuid>,
}

pub async fn verify_magic(
    State(state): State<Arc<AppState>>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = body.token.trim();
    if token.is_empty() {
        return Err(AppError::Validation("token is required".to_string()));
    }

    let identity = state
        .accounts
        .verify_magic_link(token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "magic link verification failed");
            AppError::AuthenticationRequired
        })?;

    if let Some(id) = body.session_id {
        let mut sessions = state.sessions.lock().unwrap();
        if let Some(session) = sessions.get_mut(&id) {
            session.touch(state.config.session_ttl_minutes);
            session.wizard.authenticate(identity.clone());
            tracing::info!(session = %id, "wizard session authenticated");
        }
    }

    Ok(Json(serde_json::json!({ "ok": true, "user": identity })))
}

// GET /api/auth/me
pub async fn me(State(state): State<Arc<AppState>>) -> Result<Json<serde_json::Value>, AppError> {
    let identity = state.accounts.current_identity().await.map_err(|e| {
        tracing::error!(error = %e, "identity lookup failed");
        AppError::Backend(e.to_string())
    })?;

    Ok(Json(serde_json::json!({ "user": identity })))
}

// POST /api/auth/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.accounts.logout().await.map_err(|e| {
        tracing::error!(error = %e, "logout failed");
        AppError::Backend(e.to_string())
    })?;

    Ok(Json(serde_json::json!({ "ok": true })))
}
