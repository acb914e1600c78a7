use chrono::NaiveDate;
use serde::Serialize;

/// The in-progress booking record. Enumerated fields hold the display label
/// the patient picked, never a backend code; codes are produced only at the
/// confirmation→submission transition. Each field is written once, by its
/// own step, and stays put until restart or successful submission.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DraftAppointment {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub symptoms: Option<String>,
    pub city: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub language: Option<String>,
}

impl DraftAppointment {
    pub fn clear(&mut self) {
        *self = DraftAppointment::default();
    }
}
