use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::services::accounts::AccountsProvider;
use crate::services::bookings::BookingBackend;
use crate::wizard::ChatWizard;

/// One browser session's wizard plus its idle-expiry bookkeeping.
pub struct WizardSession {
    pub wizard: ChatWizard,
    pub last_activity: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl WizardSession {
    pub fn new(wizard: ChatWizard, ttl_minutes: i64) -> Self {
        let now = Utc::now().naive_utc();
        WizardSession {
            wizard,
            last_activity: now,
            expires_at: now + Duration::minutes(ttl_minutes),
        }
    }

    pub fn touch(&mut self, ttl_minutes: i64) {
        let now = Utc::now().naive_utc();
        self.last_activity = now;
        self.expires_at = now + Duration::minutes(ttl_minutes);
    }
}

pub struct AppState {
    pub sessions: Mutex<HashMap<Uuid, WizardSession>>,
    pub config: AppConfig,
    pub accounts: Box<dyn AccountsProvider>,
    pub bookings: Box<dyn BookingBackend>,
}

impl AppState {
    /// Drop sessions whose idle expiry has passed. Called opportunistically
    /// from handlers that already hold the map.
    pub fn sweep_expired(sessions: &mut HashMap<Uuid, WizardSession>) {
        let now = Utc::now().naive_utc();
        sessions.retain(|_, session| session.expires_at > now);
    }
}
