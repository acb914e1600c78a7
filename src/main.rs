use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clinic_chat::config::AppConfig;
use clinic_chat::handlers;
use clinic_chat::services::accounts::HttpAccountsProvider;
use clinic_chat::services::bookings::HttpBookingBackend;
use clinic_chat::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let accounts = HttpAccountsProvider::new(
        config.backend_base_url.clone(),
        config.backend_timeout_secs,
    )?;
    let bookings = HttpBookingBackend::new(
        config.backend_base_url.clone(),
        config.backend_timeout_secs,
    )?;

    tracing::info!(backend = %config.backend_base_url, "using booking backend");

    let state = Arc::new(AppState {
        sessions: Mutex::new(HashMap::new()),
        config: config.clone(),
        accounts: Box::new(accounts),
        bookings: Box::new(bookings),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/sessions", post(handlers::sessions::create_session))
        .route("/api/sessions/:id", get(handlers::sessions::get_session))
        .route(
            "/api/sessions/:id/message",
            post(handlers::sessions::post_message),
        )
        .route(
            "/api/sessions/:id/confirm",
            post(handlers::sessions::confirm),
        )
        .route(
            "/api/sessions/:id/restart",
            post(handlers::sessions::restart),
        )
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/api/bookings/:id/cancel",
            post(handlers::bookings::cancel_booking),
        )
        .route(
            "/api/bookings/:id/modify-request",
            post(handlers::bookings::modify_booking),
        )
        .route("/api/auth/magic/request", post(handlers::auth::request_magic))
        .route("/api/auth/magic/verify", post(handlers::auth::verify_magic))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
