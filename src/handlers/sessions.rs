use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::Locale;
use crate::models::{ChatMessage, CreateBookingResponse};
use crate::state::{AppState, WizardSession};
use crate::wizard::{ChatWizard, DraftAppointment, StepInput, WizardStep};

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub locale: Option<String>,
}

/// What the presentation layer renders: the current step selects the input
/// control, the transcript is the chat log, the draft backs the confirmation
/// summary.
#[derive(Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub locale: Locale,
    pub step: WizardStep,
    pub authenticated: bool,
    pub transcript: Vec<ChatMessage>,
    pub draft: DraftAppointment,
}

fn snapshot_of(id: Uuid, session: &WizardSession) -> SessionSnapshot {
    SessionSnapshot {
        session_id: id,
        locale: session.wizard.locale(),
        step: session.wizard.step(),
        authenticated: session.wizard.is_authenticated(),
        transcript: session.wizard.transcript().to_vec(),
        draft: session.wizard.draft().clone(),
    }
}

// POST /api/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateSessionRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let locale = body
        .locale
        .as_deref()
        .map(Locale::parse)
        .unwrap_or(state.config.default_locale);

    // Identity is looked up once, at mount; a failed lookup starts the
    // wizard unauthenticated, same as no identity at all.
    let identity = match state.accounts.current_identity().await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(error = %e, "identity lookup failed, starting unauthenticated");
            None
        }
    };

    let wizard = ChatWizard::new(locale, identity);
    let id = Uuid::new_v4();
    tracing::info!(
        session = %id,
        locale = locale.as_str(),
        step = wizard.step().as_str(),
        "wizard session created"
    );

    let mut sessions = state.sessions.lock().unwrap();
    AppState::sweep_expired(&mut sessions);
    let session = WizardSession::new(wizard, state.config.session_ttl_minutes);
    let snapshot = snapshot_of(id, &session);
    sessions.insert(id, session);

    Ok(Json(snapshot))
}

// GET /api/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut sessions = state.sessions.lock().unwrap();
    AppState::sweep_expired(&mut sessions);
    let session = sessions.get(&id).ok_or(AppError::SessionNotFound)?;
    Ok(Json(snapshot_of(id, session)))
}

// POST /api/sessions/:id/message
#[derive(Deserialize)]
pub struct MessageRequest {
    pub text: Option<String>,
    pub date: Option<NaiveDate>,
}

pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<MessageRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let input = match body.date {
        Some(date) => StepInput::Date(date),
        None => StepInput::Text(body.text.unwrap_or_default()),
    };

    let mut sessions = state.sessions.lock().unwrap();
    AppState::sweep_expired(&mut sessions);
    let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound)?;
    session.touch(state.config.session_ttl_minutes);
    session.wizard.submit(input)?;

    Ok(Json(snapshot_of(id, session)))
}

// POST /api/sessions/:id/confirm
#[derive(Serialize)]
pub struct ConfirmResponse {
    pub booking: Option<CreateBookingResponse>,
    pub step: WizardStep,
    pub transcript: Vec<ChatMessage>,
}

pub async fn confirm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConfirmResponse>, AppError> {
    // Build the canonical request under the lock, release it for the
    // network call, then fold the outcome back in. A second confirm on the
    // same session is rejected while this one is outstanding.
    let request = {
        let mut sessions = state.sessions.lock().unwrap();
        AppState::sweep_expired(&mut sessions);
        let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound)?;
        session.touch(state.config.session_ttl_minutes);
        session.wizard.begin_submission()?
    };

    tracing::info!(
        session = %id,
        department = request.department.as_str(),
        preferred_date = %request.preferred_date,
        "submitting booking"
    );
    let outcome = state.bookings.create_booking(&request).await;

    let mut sessions = state.sessions.lock().unwrap();
    let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound)?;
    let booking = session.wizard.finish_submission(outcome);

    Ok(Json(ConfirmResponse {
        booking,
        step: session.wizard.step(),
        transcript: session.wizard.transcript().to_vec(),
    }))
}

// POST /api/sessions/:id/restart
pub async fn restart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut sessions = state.sessions.lock().unwrap();
    AppState::sweep_expired(&mut sessions);
    let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound)?;
    if session.wizard.is_submitting() {
        return Err(AppError::SubmissionInFlight);
    }
    session.touch(state.config.session_ttl_minutes);
    session.wizard.restart();

    Ok(Json(snapshot_of(id, session)))
}
