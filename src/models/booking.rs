use serde::{Deserialize, Serialize};

/// Interpretation language codes understood by the booking backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Ko,
    En,
    Vi,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Ko => "ko",
            LanguageCode::En => "en",
            LanguageCode::Vi => "vi",
        }
    }
}

/// Preferred time-of-day slot codes understood by the booking backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotCode {
    Morning,
    Afternoon,
    Anytime,
}

impl SlotCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotCode::Morning => "morning",
            SlotCode::Afternoon => "afternoon",
            SlotCode::Anytime => "anytime",
        }
    }

    /// Lenient wire-code parse; old records may carry an empty slot.
    pub fn parse(s: &str) -> SlotCode {
        match s {
            "morning" => SlotCode::Morning,
            "afternoon" => SlotCode::Afternoon,
            _ => SlotCode::Anytime,
        }
    }
}

/// Medical department codes understood by the booking backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentCode {
    Unknown,
    Internal,
    Surgery,
    Pediatrics,
    Obgyn,
    Orthopedics,
    Derm,
    Ophthalmology,
    Ent,
    Psychiatry,
    Plastic,
    Dent,
    Other,
}

impl DepartmentCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepartmentCode::Unknown => "unknown",
            DepartmentCode::Internal => "internal",
            DepartmentCode::Surgery => "surgery",
            DepartmentCode::Pediatrics => "pediatrics",
            DepartmentCode::Obgyn => "obgyn",
            DepartmentCode::Orthopedics => "orthopedics",
            DepartmentCode::Derm => "derm",
            DepartmentCode::Ophthalmology => "ophthalmology",
            DepartmentCode::Ent => "ent",
            DepartmentCode::Psychiatry => "psychiatry",
            DepartmentCode::Plastic => "plastic",
            DepartmentCode::Dent => "dent",
            DepartmentCode::Other => "other",
        }
    }
}

/// Backend lifecycle status of a stored booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Contacted,
    Scheduled,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Contacted => "contacted",
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// The patient-facing reading of the backend status: a consultant who has
    /// made contact means the booking is confirmed, a scheduled visit shows
    /// as completed.
    pub fn ui_status(&self) -> UiStatus {
        match self {
            BookingStatus::Pending => UiStatus::Pending,
            BookingStatus::Contacted => UiStatus::Confirmed,
            BookingStatus::Scheduled => UiStatus::Completed,
            BookingStatus::Cancelled => UiStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UiStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// The wire-level create request. Every enumerated field is a code, never a
/// display label; this record is built exactly once per confirm action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub symptom_note: String,
    pub preferred_date: String,
    pub preferred_time_slot: SlotCode,
    pub language: LanguageCode,
    pub city: String,
    pub department: DepartmentCode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: String,
    pub status: BookingStatus,
}

/// A booking as stored by the backend and returned from the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub symptom_note: String,
    #[serde(default)]
    pub preferred_date: Option<String>,
    /// Raw wire code; old records may carry an empty string here.
    #[serde(default)]
    pub preferred_time_slot: String,
    pub language: LanguageCode,
    #[serde(default)]
    pub city: String,
    pub department: DepartmentCode,
    pub status: BookingStatus,
    pub created_at: String,
}

/// A stored booking re-rendered for the session's locale: codes swapped back
/// to display labels for the my-bookings view.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedBooking {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub symptom_note: String,
    pub preferred_date: Option<String>,
    pub time_label: String,
    pub language_label: String,
    pub department_label: String,
    pub city: String,
    pub status: UiStatus,
    pub status_label: String,
    pub created_at: String,
}
