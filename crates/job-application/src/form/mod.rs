//! Job application form: draft state, position-aware validation, and the views rendered while
//! editing and after submission.

pub mod controller;
pub mod domain;
pub mod events;
pub mod phone;
pub mod render;
pub mod router;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use controller::{EventOutcome, FormController, FormPhase, FormState};
pub use domain::{AdditionalSkills, ApplicationDraft, FormField, Position, Skill, TextField};
pub use events::{ControlKind, FormEvent, FormEventError};
pub use phone::{
    strip_non_digits, CountryDescriptor, FixedCountryAdapter, PhoneChange, PhoneInputAdapter,
};
pub use render::{FieldView, FormView, InputKind, RenderedView, SummaryLine, SummaryView};
pub use router::form_router;
pub use session::{FormSession, FormSnapshot};
pub use validation::{validate, ValidationErrors};
