use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::i18n::Locale;
use crate::models::LocalizedBooking;
use crate::services::bookings::localize_booking;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Vec<LocalizedBooking>>, AppError> {
    let locale = query
        .locale
        .as_deref()
        .map(Locale::parse)
        .unwrap_or(state.config.default_locale);

    let bookings = state.bookings.list_my_bookings().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list bookings");
        AppError::Backend(e.to_string())
    })?;

    Ok(Json(
        bookings
            .iter()
            .map(|booking| localize_booking(booking, locale))
            .collect(),
    ))
}

// POST /api/bookings/:id/cancel
#[derive(Deserialize)]
pub struct CancelRequest {
    pub reason: Option<String>,
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<CancelRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let reason = body
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());

    state
        .bookings
        .request_cancel(&id, reason)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, booking = %id, "cancel request failed");
            AppError::Backend(e.to_string())
        })?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

// POST /api/bookings/:id/modify-request
#[derive(Deserialize)]
pub struct ModifyRequest {
    pub note: String,
}

pub async fn modify_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<ModifyRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let note = body.note.trim();
    if note.is_empty() {
        return Err(AppError::Validation("note is required".to_string()));
    }

    state
        .bookings
        .request_modify(&id, note)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, booking = %id, "modify request failed");
            AppError::Backend(e.to_string())
        })?;

    Ok(Json(serde_json::json!({ "ok": true })))
}
