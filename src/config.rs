use std::env;

use crate::i18n::Locale;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub backend_base_url: String,
    pub backend_timeout_secs: u64,
    pub session_ttl_minutes: i64,
    pub default_locale: Locale,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            backend_base_url: env::var("BACKEND_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api/v1".to_string()),
            backend_timeout_secs: env::var("BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            default_locale: Locale::parse(
                &env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "ko".to_string()),
            ),
        }
    }
}
