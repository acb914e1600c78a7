use chrono::{NaiveDate, Utc};

use crate::i18n::Locale;
use crate::models::{ChatMessage, ChatRole, CreateBookingRequest, CreateBookingResponse, Identity};
use crate::services::bookings::build_booking_request;
use crate::wizard::draft::DraftAppointment;
use crate::wizard::step::WizardStep;

/// A value submitted for the current step. Every capture step takes text
/// except the date step, which takes a calendar date.
#[derive(Debug, Clone)]
pub enum StepInput {
    Text(String),
    Date(NaiveDate),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("step {0} requires a non-empty value")]
    EmptyValue(&'static str),
    #[error("step {0} does not capture input")]
    NotACaptureStep(&'static str),
    #[error("the date step requires a calendar date")]
    DateRequired,
    #[error("step {0} requires a text value")]
    TextRequired(&'static str),
    #[error("cannot submit from step {0}")]
    NotAtConfirmation(&'static str),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

/// The booking conversation: one instance per session, exclusively owning its
/// transcript and draft. Locale and identity are fixed at construction; the
/// caller re-authenticates the wizard explicitly when the patient logs in.
pub struct ChatWizard {
    locale: Locale,
    identity: Option<Identity>,
    step: WizardStep,
    draft: DraftAppointment,
    transcript: Vec<ChatMessage>,
    submitting: bool,
}

impl ChatWizard {
    pub fn new(locale: Locale, identity: Option<Identity>) -> Self {
        let mut wizard = ChatWizard {
            locale,
            identity,
            step: WizardStep::Welcome,
            draft: DraftAppointment::default(),
            transcript: Vec::new(),
            submitting: false,
        };
        wizard.begin();
        wizard
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn draft(&self) -> &DraftAppointment {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Accept the patient's value for the current capture step: validate,
    /// store the display value in the draft, echo it into the transcript,
    /// advance, and emit the next step's prompt. Rejected input changes
    /// nothing, including the transcript.
    pub fn submit(&mut self, input: StepInput) -> Result<(), WizardError> {
        if self.step == WizardStep::Unauthenticated {
            return Err(WizardError::AuthenticationRequired);
        }
        if !self.step.is_capture() {
            return Err(WizardError::NotACaptureStep(self.step.as_str()));
        }

        let echoed = match (self.step, input) {
            (WizardStep::Date, StepInput::Date(date)) => {
                self.draft.date = Some(date);
                date.format("%Y-%m-%d").to_string()
            }
            (WizardStep::Date, StepInput::Text(_)) => return Err(WizardError::DateRequired),
            (step, StepInput::Date(_)) => return Err(WizardError::TextRequired(step.as_str())),
            (step, StepInput::Text(value)) => {
                if value.trim().is_empty() {
                    return Err(WizardError::EmptyValue(step.as_str()));
                }
                let field = match step {
                    WizardStep::Name => &mut self.draft.name,
                    WizardStep::Phone => &mut self.draft.phone,
                    WizardStep::Department => &mut self.draft.department,
                    WizardStep::Symptoms => &mut self.draft.symptoms,
                    WizardStep::City => &mut self.draft.city,
                    WizardStep::Time => &mut self.draft.time,
                    WizardStep::Language => &mut self.draft.language,
                    _ => return Err(WizardError::NotACaptureStep(step.as_str())),
                };
                *field = Some(value.clone());
                value
            }
        };

        self.push_user(&echoed);

        let next = self.step.next();
        tracing::debug!(
            from = self.step.as_str(),
            to = next.as_str(),
            "wizard step advance"
        );
        self.step = next;
        self.push_prompt(next);
        Ok(())
    }

    /// First half of the confirm action: validate state and produce the
    /// canonical, code-normalized request. Marks the submission in flight;
    /// the caller must settle it with [`finish_submission`].
    ///
    /// [`finish_submission`]: ChatWizard::finish_submission
    pub fn begin_submission(&mut self) -> Result<CreateBookingRequest, WizardError> {
        if self.step != WizardStep::Confirmation {
            return Err(WizardError::NotAtConfirmation(self.step.as_str()));
        }
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        let identity = self
            .identity
            .as_ref()
            .ok_or(WizardError::AuthenticationRequired)?;

        let request = build_booking_request(&self.draft, identity, self.locale);
        self.submitting = true;
        Ok(request)
    }

    /// Fold the settled create call back into machine state. Success moves to
    /// `Complete` and discards the draft; failure keeps the wizard at
    /// confirmation with the draft untouched so the patient can retry.
    pub fn finish_submission(
        &mut self,
        outcome: anyhow::Result<CreateBookingResponse>,
    ) -> Option<CreateBookingResponse> {
        self.submitting = false;
        let messages = self.locale.messages();
        match outcome {
            Ok(created) => {
                tracing::info!(booking_id = %created.id, "booking submitted");
                self.draft.clear();
                self.step = WizardStep::Complete;
                self.push_bot(messages.complete);
                Some(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "booking submission failed");
                self.push_bot(messages.submit_failed);
                None
            }
        }
    }

    /// Clear transcript and draft and re-enter at the top. Also serves as the
    /// confirmation-step edit action; there is no single-field editing.
    pub fn restart(&mut self) {
        tracing::debug!(step = self.step.as_str(), "wizard restart");
        self.transcript.clear();
        self.draft.clear();
        self.submitting = false;
        self.begin();
    }

    /// Re-enter the collection flow once the patient has authenticated.
    /// A no-op for a wizard that is already past the stall.
    pub fn authenticate(&mut self, identity: Identity) {
        self.identity = Some(identity);
        if self.step == WizardStep::Unauthenticated {
            self.transcript.clear();
            self.begin();
        }
    }

    fn begin(&mut self) {
        if self.identity.is_none() {
            self.step = WizardStep::Unauthenticated;
            self.push_prompt(WizardStep::Unauthenticated);
            return;
        }
        self.step = WizardStep::Welcome;
        self.push_prompt(WizardStep::Welcome);
        self.step = WizardStep::Name;
        self.push_prompt(WizardStep::Name);
    }

    // Entering a step emits exactly this one bot message.
    fn push_prompt(&mut self, step: WizardStep) {
        let messages = self.locale.messages();
        let prompt = match step {
            WizardStep::Unauthenticated => messages.auth_required,
            WizardStep::Welcome => messages.welcome,
            WizardStep::Name => messages.ask_name,
            WizardStep::Phone => messages.ask_phone,
            WizardStep::Department => messages.ask_department,
            WizardStep::Symptoms => messages.ask_symptoms,
            WizardStep::City => messages.ask_city,
            WizardStep::Date => messages.ask_date,
            WizardStep::Time => messages.ask_time,
            WizardStep::Language => messages.ask_language,
            WizardStep::Confirmation => messages.confirmation,
            WizardStep::Complete => messages.complete,
        };
        self.push_bot(prompt);
    }

    fn push_bot(&mut self, content: &str) {
        self.transcript.push(ChatMessage {
            role: ChatRole::Bot,
            content: content.to_string(),
            timestamp: Utc::now().naive_utc(),
        });
    }

    fn push_user(&mut self, content: &str) {
        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            content: content.to_string(),
            timestamp: Utc::now().naive_utc(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, DepartmentCode, LanguageCode, SlotCode};

    fn identity() -> Identity {
        Identity {
            email: "jane@example.com".to_string(),
            name: "Jane Doe".to_string(),
        }
    }

    fn wizard_en() -> ChatWizard {
        ChatWizard::new(Locale::En, Some(identity()))
    }

    fn text(s: &str) -> StepInput {
        StepInput::Text(s.to_string())
    }

    fn date(s: &str) -> StepInput {
        StepInput::Date(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
    }

    /// Walk the English happy path up to the confirmation step.
    fn filled_wizard_en() -> ChatWizard {
        let mut wizard = wizard_en();
        wizard.submit(text("Jane Doe")).unwrap();
        wizard.submit(text("010-1234-5678")).unwrap();
        wizard.submit(text("Internal Medicine")).unwrap();
        wizard.submit(text("fever")).unwrap();
        wizard.submit(text("Seoul")).unwrap();
        wizard.submit(date("2025-03-10")).unwrap();
        wizard.submit(text("Morning (09:00-12:00)")).unwrap();
        wizard.submit(text("English")).unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirmation);
        wizard
    }

    fn created() -> CreateBookingResponse {
        CreateBookingResponse {
            id: "bk-1".to_string(),
            status: BookingStatus::Pending,
        }
    }

    #[test]
    fn test_start_greets_and_asks_name() {
        let wizard = wizard_en();
        assert_eq!(wizard.step(), WizardStep::Name);
        let transcript = wizard.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, ChatRole::Bot);
        assert_eq!(transcript[1].content, "What is your name?");
    }

    #[test]
    fn test_no_identity_stalls_at_unauthenticated() {
        let mut wizard = ChatWizard::new(Locale::Ko, None);
        assert_eq!(wizard.step(), WizardStep::Unauthenticated);
        assert_eq!(wizard.transcript().len(), 1);
        assert_eq!(
            wizard.transcript()[0].content,
            Locale::Ko.messages().auth_required
        );

        let err = wizard.submit(text("김하나")).unwrap_err();
        assert_eq!(err, WizardError::AuthenticationRequired);
        assert_eq!(wizard.step(), WizardStep::Unauthenticated);
        // The stall notice stays the only transcript entry.
        assert_eq!(wizard.transcript().len(), 1);
    }

    #[test]
    fn test_authenticate_reenters_collection() {
        let mut wizard = ChatWizard::new(Locale::En, None);
        wizard.authenticate(identity());
        assert_eq!(wizard.step(), WizardStep::Name);
        assert_eq!(wizard.transcript().len(), 2);
    }

    #[test]
    fn test_empty_value_is_rejected_without_side_effects() {
        let mut wizard = wizard_en();
        let before = wizard.transcript().len();

        let err = wizard.submit(text("   ")).unwrap_err();
        assert_eq!(err, WizardError::EmptyValue("name"));
        assert_eq!(wizard.step(), WizardStep::Name);
        assert_eq!(wizard.transcript().len(), before);
        assert!(wizard.draft().name.is_none());
    }

    #[test]
    fn test_date_step_requires_a_date() {
        let mut wizard = wizard_en();
        wizard.submit(text("Jane Doe")).unwrap();
        wizard.submit(text("010-1234-5678")).unwrap();
        wizard.submit(text("Internal Medicine")).unwrap();
        wizard.submit(text("fever")).unwrap();
        wizard.submit(text("Seoul")).unwrap();
        assert_eq!(wizard.step(), WizardStep::Date);

        let err = wizard.submit(text("next monday")).unwrap_err();
        assert_eq!(err, WizardError::DateRequired);
        assert_eq!(wizard.step(), WizardStep::Date);
        assert!(wizard.draft().date.is_none());
    }

    #[test]
    fn test_draft_stores_display_labels_verbatim() {
        let wizard = filled_wizard_en();
        let draft = wizard.draft();
        assert_eq!(draft.name.as_deref(), Some("Jane Doe"));
        assert_eq!(draft.department.as_deref(), Some("Internal Medicine"));
        assert_eq!(draft.time.as_deref(), Some("Morning (09:00-12:00)"));
        assert_eq!(draft.language.as_deref(), Some("English"));
        assert_eq!(
            draft.date,
            Some(NaiveDate::parse_from_str("2025-03-10", "%Y-%m-%d").unwrap())
        );
    }

    #[test]
    fn test_transcript_alternates_prompt_and_answer() {
        let wizard = filled_wizard_en();
        let transcript = wizard.transcript();
        // greeting + first prompt, then each submit appends answer + next prompt
        assert_eq!(transcript.len(), 2 + 8 * 2);
        assert_eq!(transcript[2].role, ChatRole::User);
        assert_eq!(transcript[2].content, "Jane Doe");
        // the calendar date is echoed as its YYYY-MM-DD rendering
        assert_eq!(transcript[12].content, "2025-03-10");
        assert_eq!(
            transcript.last().unwrap().content,
            Locale::En.messages().confirmation
        );
    }

    #[test]
    fn test_submission_payload_uses_codes() {
        let mut wizard = filled_wizard_en();
        let request = wizard.begin_submission().unwrap();
        assert_eq!(request.preferred_time_slot, SlotCode::Morning);
        assert_eq!(request.language, LanguageCode::En);
        assert_eq!(request.department, DepartmentCode::Internal);
        assert_eq!(request.preferred_date, "2025-03-10");
        assert_eq!(request.email, "jane@example.com");
        assert_eq!(request.name, "Jane Doe");
        assert!(wizard.is_submitting());
    }

    #[test]
    fn test_second_confirm_is_rejected_while_in_flight() {
        let mut wizard = filled_wizard_en();
        wizard.begin_submission().unwrap();
        let err = wizard.begin_submission().unwrap_err();
        assert_eq!(err, WizardError::SubmissionInFlight);
    }

    #[test]
    fn test_confirm_before_confirmation_step_is_rejected() {
        let mut wizard = wizard_en();
        let err = wizard.begin_submission().unwrap_err();
        assert_eq!(err, WizardError::NotAtConfirmation("name"));
    }

    #[test]
    fn test_failed_submission_preserves_draft_for_retry() {
        let mut wizard = filled_wizard_en();
        wizard.begin_submission().unwrap();
        let result = wizard.finish_submission(Err(anyhow::anyhow!("backend down")));
        assert!(result.is_none());
        assert_eq!(wizard.step(), WizardStep::Confirmation);
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.draft().name.as_deref(), Some("Jane Doe"));
        assert_eq!(
            wizard.transcript().last().unwrap().content,
            Locale::En.messages().submit_failed
        );

        // Retry with the same draft issues a fresh request and completes.
        let retry = wizard.begin_submission().unwrap();
        assert_eq!(retry.department, DepartmentCode::Internal);
        wizard.finish_submission(Ok(created())).unwrap();
        assert_eq!(wizard.step(), WizardStep::Complete);
    }

    #[test]
    fn test_successful_submission_completes_and_discards_draft() {
        let mut wizard = filled_wizard_en();
        wizard.begin_submission().unwrap();
        let result = wizard.finish_submission(Ok(created())).unwrap();
        assert_eq!(result.id, "bk-1");
        assert_eq!(wizard.step(), WizardStep::Complete);
        assert!(wizard.draft().name.is_none());
        assert_eq!(
            wizard.transcript().last().unwrap().content,
            Locale::En.messages().complete
        );
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut wizard = filled_wizard_en();
        wizard.begin_submission().unwrap();
        wizard.finish_submission(Ok(created())).unwrap();
        assert_eq!(wizard.step(), WizardStep::Complete);

        wizard.restart();
        assert_eq!(wizard.step(), WizardStep::Name);
        assert_eq!(wizard.transcript().len(), 2);
        assert!(wizard.draft().phone.is_none());
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_restart_without_identity_returns_to_stall() {
        let mut wizard = ChatWizard::new(Locale::Vi, None);
        wizard.restart();
        assert_eq!(wizard.step(), WizardStep::Unauthenticated);
        assert_eq!(wizard.transcript().len(), 1);
    }
}
