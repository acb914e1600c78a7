use serde::{Deserialize, Serialize};

/// The authenticated patient, as reported by the accounts backend.
/// Read-only to the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub name: String,
}
