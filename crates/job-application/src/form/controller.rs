use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::ApplicationDraft;
use super::events::{ControlKind, FormEvent, FormEventError};
use super::phone::{CountryDescriptor, PhoneChange};
use super::render::{FormView, RenderedView, SummaryView};
use super::validation::{validate, ValidationErrors};

/// Two-state lifecycle. `Editing -> Submitted` is one-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Result of feeding one event to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    Updated,
    Accepted,
    Rejected { errors: usize },
    /// The draft is frozen after submission.
    Ignored,
}

/// Complete widget state: the draft, the errors of the last validation pass, and the phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub draft: ApplicationDraft,
    pub errors: ValidationErrors,
    pub phase: FormPhase,
}

impl FormState {
    pub fn with_draft(draft: ApplicationDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Pure transition function. Field edits never touch the errors or the phase.
    pub fn reduce(mut self, event: FormEvent) -> (Self, EventOutcome) {
        if self.is_submitted() {
            return (self, EventOutcome::Ignored);
        }

        let outcome = match event {
            FormEvent::TextChanged { field, value } => {
                self.draft.set_text(field, value);
                EventOutcome::Updated
            }
            FormEvent::PositionSelected { position } => {
                self.draft.position = position;
                EventOutcome::Updated
            }
            FormEvent::SkillToggled { skill, checked } => {
                self.draft.additional_skills.set(skill, checked);
                EventOutcome::Updated
            }
            FormEvent::PhoneChanged(change) => {
                self.draft.phone_number = change.digits();
                self.draft.country_code = change.country.dial_code;
                EventOutcome::Updated
            }
            FormEvent::Submit => {
                self.errors = validate(&self.draft);
                if self.errors.is_empty() {
                    self.phase = FormPhase::Submitted;
                    EventOutcome::Accepted
                } else {
                    EventOutcome::Rejected {
                        errors: self.errors.len(),
                    }
                }
            }
        };

        (self, outcome)
    }

    pub fn view(&self) -> RenderedView {
        match self.phase {
            FormPhase::Editing => RenderedView::Form(FormView::from_state(self)),
            FormPhase::Submitted => RenderedView::Summary(SummaryView::from_draft(&self.draft)),
        }
    }
}

/// Owner of one form instance for the lifetime of the rendered widget.
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing draft, still in the editing phase.
    pub fn from_draft(draft: ApplicationDraft) -> Self {
        Self {
            state: FormState::with_draft(draft),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.state.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.state.is_submitted()
    }

    pub fn view(&self) -> RenderedView {
        self.state.view()
    }

    /// Summary of the accepted application; `None` while still editing.
    pub fn summary(&self) -> Option<SummaryView> {
        self.is_submitted()
            .then(|| SummaryView::from_draft(&self.state.draft))
    }

    pub fn dispatch(&mut self, event: FormEvent) -> EventOutcome {
        let label = event.label();
        let (state, outcome) = std::mem::take(&mut self.state).reduce(event);
        self.state = state;

        match outcome {
            EventOutcome::Updated => debug!(event = label, "form draft updated"),
            EventOutcome::Accepted => info!(
                position = %self.state.draft.position,
                "application submitted"
            ),
            EventOutcome::Rejected { errors } => {
                let fields: Vec<&str> = self
                    .state
                    .errors
                    .iter()
                    .map(|(field, _)| field.key())
                    .collect();
                info!(errors, ?fields, "application rejected by validation");
            }
            EventOutcome::Ignored => warn!(event = label, "form already submitted; event ignored"),
        }

        outcome
    }

    /// Apply a change from a named control. Checkbox changes only touch the skill checklist.
    pub fn handle_field_change(
        &mut self,
        name: &str,
        value: &str,
        kind: ControlKind,
    ) -> Result<EventOutcome, FormEventError> {
        let event = FormEvent::from_control(name, value, kind)?;
        Ok(self.dispatch(event))
    }

    /// Store the digits of `raw` and the dial code the phone widget detected.
    pub fn handle_phone_change(&mut self, raw: &str, country: &CountryDescriptor) -> EventOutcome {
        self.dispatch(FormEvent::PhoneChanged(PhoneChange::new(raw, country.clone())))
    }

    /// Re-run every rule against the current draft and replace the stored errors.
    pub fn validate(&mut self) -> ValidationErrors {
        let errors = validate(&self.state.draft);
        self.state.errors = errors.clone();
        errors
    }

    pub fn handle_submit(&mut self) -> EventOutcome {
        self.dispatch(FormEvent::Submit)
    }
}
