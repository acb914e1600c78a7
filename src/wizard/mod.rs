pub mod draft;
pub mod machine;
pub mod step;

pub use draft::DraftAppointment;
pub use machine::{ChatWizard, StepInput, WizardError};
pub use step::WizardStep;
