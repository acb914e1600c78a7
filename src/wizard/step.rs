use serde::{Deserialize, Serialize};

/// The fixed, totally ordered steps of the booking conversation. The machine
/// is always in exactly one step; `Unauthenticated` preempts `Welcome` when
/// no identity is present and the wizard stalls there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Unauthenticated,
    Welcome,
    Name,
    Phone,
    Department,
    Symptoms,
    City,
    Date,
    Time,
    Language,
    Confirmation,
    Complete,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Unauthenticated => "unauthenticated",
            WizardStep::Welcome => "welcome",
            WizardStep::Name => "name",
            WizardStep::Phone => "phone",
            WizardStep::Department => "department",
            WizardStep::Symptoms => "symptoms",
            WizardStep::City => "city",
            WizardStep::Date => "date",
            WizardStep::Time => "time",
            WizardStep::Language => "language",
            WizardStep::Confirmation => "confirmation",
            WizardStep::Complete => "complete",
        }
    }

    /// Successor in the fixed collection order. Terminal and stalled steps
    /// map to themselves.
    pub fn next(&self) -> WizardStep {
        match self {
            WizardStep::Unauthenticated => WizardStep::Unauthenticated,
            WizardStep::Welcome => WizardStep::Name,
            WizardStep::Name => WizardStep::Phone,
            WizardStep::Phone => WizardStep::Department,
            WizardStep::Department => WizardStep::Symptoms,
            WizardStep::Symptoms => WizardStep::City,
            WizardStep::City => WizardStep::Date,
            WizardStep::Date => WizardStep::Time,
            WizardStep::Time => WizardStep::Language,
            WizardStep::Language => WizardStep::Confirmation,
            WizardStep::Confirmation => WizardStep::Complete,
            WizardStep::Complete => WizardStep::Complete,
        }
    }

    /// Steps that collect a value from the patient.
    pub fn is_capture(&self) -> bool {
        matches!(
            self,
            WizardStep::Name
                | WizardStep::Phone
                | WizardStep::Department
                | WizardStep::Symptoms
                | WizardStep::City
                | WizardStep::Date
                | WizardStep::Time
                | WizardStep::Language
        )
    }
}
