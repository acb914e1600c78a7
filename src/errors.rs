use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::wizard::WizardError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("authentication required")]
    AuthenticationRequired,

    #[error("session not found")]
    SessionNotFound,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("booking backend error: {0}")]
    Backend(String),
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::AuthenticationRequired => AppError::AuthenticationRequired,
            WizardError::SubmissionInFlight => AppError::SubmissionInFlight,
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            AppError::SessionNotFound => StatusCode::NOT_FOUND,
            AppError::SubmissionInFlight => StatusCode::CONFLICT,
            AppError::Backend(_) => StatusCode::BAD_GATEWAY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
