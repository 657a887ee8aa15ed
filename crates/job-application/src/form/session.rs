use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use super::controller::{EventOutcome, FormController, FormPhase};
use super::domain::{ApplicationDraft, FormField, Skill};
use super::events::{ControlKind, FormEvent, FormEventError};
use super::phone::{CountryDescriptor, PhoneInputAdapter};
use super::render::{RenderedView, SummaryView};
use super::validation::ValidationErrors;

/// Single widget instance shared by a host. Every event runs to completion under the lock.
pub struct FormSession<P> {
    controller: Mutex<FormController>,
    phone: P,
}

impl<P> FormSession<P>
where
    P: PhoneInputAdapter + 'static,
{
    pub fn new(phone: P) -> Self {
        Self {
            controller: Mutex::new(FormController::new()),
            phone,
        }
    }

    fn controller(&self) -> MutexGuard<'_, FormController> {
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::capture(&self.controller())
    }

    pub fn change_field(
        &self,
        name: &str,
        value: &str,
        kind: ControlKind,
    ) -> Result<(EventOutcome, FormSnapshot), FormEventError> {
        let mut controller = self.controller();
        let outcome = controller.handle_field_change(name, value, kind)?;
        Ok((outcome, FormSnapshot::capture(&controller)))
    }

    /// Apply a phone keystroke. Without a country from the client the adapter decides.
    pub fn change_phone(
        &self,
        raw: &str,
        country: Option<CountryDescriptor>,
    ) -> (EventOutcome, FormSnapshot) {
        let country = country.unwrap_or_else(|| self.phone.detect(raw).country);
        let mut controller = self.controller();
        let outcome = controller.handle_phone_change(raw, &country);
        (outcome, FormSnapshot::capture(&controller))
    }

    pub fn submit(&self) -> (EventOutcome, FormSnapshot) {
        let mut controller = self.controller();
        let outcome = controller.handle_submit();
        (outcome, FormSnapshot::capture(&controller))
    }

    /// Apply a whole posted form, then submit it. Checkboxes absent from `pairs` are unchecked,
    /// as browsers only send checked boxes. Nothing is applied when any pair is rejected.
    pub fn submit_form(
        &self,
        pairs: &[(String, String)],
    ) -> Result<(EventOutcome, FormSnapshot), FormEventError> {
        let mut events = Vec::with_capacity(pairs.len() + Skill::ALL.len());
        for (name, value) in pairs {
            if name.parse::<Skill>().is_ok() {
                continue;
            }
            let event = if name == FormField::PhoneNumber.key() {
                FormEvent::PhoneChanged(self.phone.detect(value))
            } else {
                FormEvent::from_control(name, value, ControlKind::Input)?
            };
            events.push(event);
        }
        for skill in Skill::ALL {
            let event = match pairs.iter().rfind(|(name, _)| name == skill.key()) {
                Some((name, value)) => FormEvent::from_control(name, value, ControlKind::Checkbox)?,
                None => FormEvent::SkillToggled {
                    skill,
                    checked: false,
                },
            };
            events.push(event);
        }

        let mut controller = self.controller();
        for event in events {
            controller.dispatch(event);
        }
        let outcome = controller.handle_submit();
        Ok((outcome, FormSnapshot::capture(&controller)))
    }

    pub fn summary(&self) -> Option<SummaryView> {
        self.controller().summary()
    }

    pub fn html(&self) -> String {
        self.controller().view().to_html()
    }
}

/// Serializable copy of the widget state returned by the host endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub phase: FormPhase,
    pub submitted: bool,
    pub draft: ApplicationDraft,
    pub errors: ValidationErrors,
    pub view: RenderedView,
}

impl FormSnapshot {
    pub fn capture(controller: &FormController) -> Self {
        let state = controller.state();
        Self {
            phase: state.phase,
            submitted: state.is_submitted(),
            draft: state.draft.clone(),
            errors: state.errors.clone(),
            view: state.view(),
        }
    }
}
