use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use crate::i18n::Locale;
use crate::labels::{
    department_code_to_label, department_label_to_code, language_code_to_label,
    language_label_to_code, slot_to_label, time_label_to_slot,
};
use crate::models::{
    Booking, CreateBookingRequest, CreateBookingResponse, Identity, LocalizedBooking, SlotCode,
};
use crate::wizard::DraftAppointment;

/// The clinic booking backend. One create call per confirm action; retries
/// are never deduplicated here, the backend owns duplicate detection.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> anyhow::Result<CreateBookingResponse>;

    async fn list_my_bookings(&self) -> anyhow::Result<Vec<Booking>>;

    async fn request_cancel(&self, id: &str, reason: Option<&str>) -> anyhow::Result<()>;

    async fn request_modify(&self, id: &str, note: &str) -> anyhow::Result<()>;
}

/// Build the canonical request from a completed draft. This is the only
/// place display labels become backend codes; the email comes from the
/// authenticated identity.
pub fn build_booking_request(
    draft: &DraftAppointment,
    identity: &Identity,
    locale: Locale,
) -> CreateBookingRequest {
    CreateBookingRequest {
        name: draft.name.clone().unwrap_or_default(),
        phone: draft.phone.clone().unwrap_or_default(),
        email: identity.email.clone(),
        symptom_note: draft.symptoms.clone().unwrap_or_default(),
        preferred_date: draft
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        preferred_time_slot: time_label_to_slot(draft.time.as_deref().unwrap_or("")),
        language: language_label_to_code(draft.language.as_deref().unwrap_or("")),
        city: draft.city.clone().unwrap_or_default(),
        department: department_label_to_code(draft.department.as_deref().unwrap_or(""), locale),
    }
}

/// Swap a stored booking's codes back to display labels for the session's
/// locale. Used by the my-bookings view, never during capture.
pub fn localize_booking(booking: &Booking, locale: Locale) -> LocalizedBooking {
    let slot = SlotCode::parse(&booking.preferred_time_slot);
    let statuses = &locale.messages().statuses;
    let ui_status = booking.status.ui_status();
    let status_label = match ui_status {
        crate::models::UiStatus::Pending => statuses[0],
        crate::models::UiStatus::Confirmed => statuses[1],
        crate::models::UiStatus::Completed => statuses[2],
        crate::models::UiStatus::Cancelled => statuses[3],
    };

    LocalizedBooking {
        id: booking.id.clone(),
        name: booking.name.clone(),
        phone: booking.phone.clone(),
        email: booking.email.clone(),
        symptom_note: booking.symptom_note.clone(),
        preferred_date: booking.preferred_date.clone(),
        time_label: slot_to_label(slot, locale).to_string(),
        language_label: language_code_to_label(booking.language, locale).to_string(),
        department_label: department_code_to_label(booking.department, locale).to_string(),
        city: booking.city.clone(),
        status: ui_status,
        status_label: status_label.to_string(),
        created_at: booking.created_at.clone(),
    }
}

pub struct HttpBookingBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingBackend {
    pub fn new(base_url: String, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build booking backend HTTP client")?;
        Ok(HttpBookingBackend { base_url, client })
    }
}

#[derive(Serialize)]
struct CancelBody<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

#[derive(Serialize)]
struct ModifyBody<'a> {
    #[serde(rename = "bookingId")]
    booking_id: &'a str,
    note: &'a str,
}

#[async_trait]
impl BookingBackend for HttpBookingBackend {
    async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> anyhow::Result<CreateBookingResponse> {
        let url = format!("{}/bookings/", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("failed to reach booking backend")?
            .error_for_status()
            .context("booking backend rejected create request")?;

        response
            .json()
            .await
            .context("invalid create booking response")
    }

    async fn list_my_bookings(&self) -> anyhow::Result<Vec<Booking>> {
        let url = format!("{}/bookings/?mine=1", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to reach booking backend")?
            .error_for_status()
            .context("booking backend rejected list request")?;

        response.json().await.context("invalid booking list response")
    }

    async fn request_cancel(&self, id: &str, reason: Option<&str>) -> anyhow::Result<()> {
        let url = format!("{}/bookings/cancel/", self.base_url);
        self.client
            .post(&url)
            .json(&CancelBody { id, reason })
            .send()
            .await
            .context("failed to reach booking backend")?
            .error_for_status()
            .context("booking backend rejected cancel request")?;
        Ok(())
    }

    async fn request_modify(&self, id: &str, note: &str) -> anyhow::Result<()> {
        let url = format!("{}/bookings/modify-request/", self.base_url);
        self.client
            .post(&url)
            .json(&ModifyBody {
                booking_id: id,
                note,
            })
            .send()
            .await
            .context("failed to reach booking backend")?
            .error_for_status()
            .context("booking backend rejected modify request")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, DepartmentCode, LanguageCode};

    fn stored_booking() -> Booking {
        Booking {
            id: "bk-7".to_string(),
            name: "Nguyễn Thị Lan".to_string(),
            phone: "010-9876-5432".to_string(),
            email: Some("lan@example.com".to_string()),
            symptom_note: "đau đầu".to_string(),
            preferred_date: Some("2025-04-02".to_string()),
            preferred_time_slot: "afternoon".to_string(),
            language: LanguageCode::Vi,
            city: "Busan".to_string(),
            department: DepartmentCode::Derm,
            status: BookingStatus::Contacted,
            created_at: "2025-03-28T09:10:00Z".to_string(),
        }
    }

    #[test]
    fn test_localize_booking_renders_labels_for_locale() {
        let localized = localize_booking(&stored_booking(), Locale::En);
        assert_eq!(localized.time_label, "Afternoon (13:00-18:00)");
        assert_eq!(localized.language_label, "Vietnamese");
        assert_eq!(localized.department_label, "Dermatology");
        assert_eq!(localized.status, crate::models::UiStatus::Confirmed);
        assert_eq!(localized.status_label, "Confirmed");

        let localized_ko = localize_booking(&stored_booking(), Locale::Ko);
        assert_eq!(localized_ko.department_label, "피부과");
        assert_eq!(localized_ko.status_label, "확인됨");
    }

    #[test]
    fn test_localize_booking_defaults_empty_slot_to_anytime() {
        let mut booking = stored_booking();
        booking.preferred_time_slot = String::new();
        let localized = localize_booking(&booking, Locale::En);
        assert_eq!(localized.time_label, "Any time");
    }
}
