use super::common::*;

use crate::form::controller::{EventOutcome, FormController, FormPhase, FormState};
use crate::form::domain::{ApplicationDraft, FormField, Position, Skill, TextField};
use crate::form::events::{ControlKind, FormEvent};
use crate::form::phone::CountryDescriptor;
use crate::form::render::RenderedView;

fn fill_developer(controller: &mut FormController) {
    for (name, value) in [
        ("fullName", "Jane"),
        ("email", "j@x.com"),
        ("position", "Developer"),
        ("relevantExperience", "3"),
        ("interviewTime", "2024-01-01T10:00"),
    ] {
        controller
            .handle_field_change(name, value, ControlKind::Input)
            .expect("known control");
    }
    controller
        .handle_field_change("javascript", "true", ControlKind::Checkbox)
        .expect("known checkbox");
    controller.handle_phone_change("+1 (555) 123-4567", &CountryDescriptor::with_dial_code("1"));
}

#[test]
fn mounts_with_defaults() {
    let controller = FormController::new();
    assert_eq!(controller.draft(), &ApplicationDraft::default());
    assert_eq!(controller.draft().position, Position::Developer);
    assert!(controller.errors().is_empty());
    assert!(!controller.is_submitted());
}

#[test]
fn checkbox_changes_touch_only_the_skill() {
    let mut controller = FormController::from_draft(developer_draft());
    let before = controller.draft().clone();

    controller
        .handle_field_change("python", "true", ControlKind::Checkbox)
        .expect("known checkbox");

    let after = controller.draft();
    assert!(after.additional_skills.get(Skill::Python));
    assert!(after.additional_skills.get(Skill::Javascript));
    assert_eq!(
        ApplicationDraft {
            additional_skills: before.additional_skills,
            ..after.clone()
        },
        before
    );
}

#[test]
fn field_changes_do_not_touch_errors() {
    let mut controller = FormController::new();
    controller.handle_submit();
    let errors = controller.errors().clone();
    assert!(!errors.is_empty());

    controller
        .handle_field_change("fullName", "Jane", ControlKind::Input)
        .expect("known control");

    assert_eq!(controller.errors(), &errors);
    assert_eq!(controller.draft().full_name, "Jane");
    assert!(!controller.is_submitted());
}

#[test]
fn phone_change_strips_formatting_and_stores_dial_code() {
    let mut controller = FormController::new();
    let outcome = controller.handle_phone_change(
        "+44 20 7946-0958",
        &CountryDescriptor::with_dial_code("44"),
    );

    assert_eq!(outcome, EventOutcome::Updated);
    assert_eq!(controller.draft().phone_number, "442079460958");
    assert_eq!(controller.draft().country_code, "44");
}

#[test]
fn validate_replaces_stored_errors() {
    let mut controller = FormController::new();
    let errors = controller.validate();
    assert_eq!(controller.errors(), &errors);
    assert!(errors.contains(FormField::FullName));

    controller
        .handle_field_change("fullName", "Jane", ControlKind::Input)
        .expect("known control");
    let errors = controller.validate();
    assert!(!errors.contains(FormField::FullName));
    assert!(!controller.errors().contains(FormField::FullName));
    assert!(!controller.is_submitted());
}

#[test]
fn invalid_submit_is_idempotent() {
    let mut controller = FormController::new();
    let first = controller.handle_submit();
    let first_errors = controller.errors().clone();
    let second = controller.handle_submit();

    assert_eq!(first, EventOutcome::Rejected { errors: 6 });
    assert_eq!(first, second);
    assert_eq!(controller.errors(), &first_errors);
    assert!(!controller.is_submitted());
}

#[test]
fn valid_submit_transitions_to_submitted() {
    let mut controller = FormController::new();
    fill_developer(&mut controller);

    assert_eq!(controller.handle_submit(), EventOutcome::Accepted);
    assert!(controller.is_submitted());
    assert!(controller.errors().is_empty());
    assert_eq!(controller.draft().phone_number, "15551234567");
    assert!(matches!(controller.view(), RenderedView::Summary(_)));
}

#[test]
fn submitted_draft_is_frozen() {
    let mut controller = FormController::from_draft(developer_draft());
    assert_eq!(controller.handle_submit(), EventOutcome::Accepted);
    let frozen = controller.draft().clone();

    let outcome = controller
        .handle_field_change("fullName", "Someone Else", ControlKind::Input)
        .expect("known control");
    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(
        controller.handle_phone_change("999", &CountryDescriptor::with_dial_code("7")),
        EventOutcome::Ignored
    );
    assert_eq!(controller.handle_submit(), EventOutcome::Ignored);
    assert_eq!(controller.draft(), &frozen);
    assert!(controller.is_submitted());
}

#[test]
fn reducer_is_pure_over_state_and_event() {
    let state = FormState::default();
    let (next, outcome) = state.clone().reduce(FormEvent::TextChanged {
        field: TextField::Email,
        value: "j@x.com".to_string(),
    });

    assert_eq!(outcome, EventOutcome::Updated);
    assert_eq!(state.draft.email, "");
    assert_eq!(next.draft.email, "j@x.com");
    assert_eq!(next.phase, FormPhase::Editing);

    let (replayed, _) = state.reduce(FormEvent::TextChanged {
        field: TextField::Email,
        value: "j@x.com".to_string(),
    });
    assert_eq!(replayed, next);
}

#[test]
fn switching_position_keeps_hidden_values() {
    let mut controller = FormController::from_draft(designer_draft());
    controller
        .handle_field_change("position", "Manager", ControlKind::Input)
        .expect("known control");

    assert_eq!(controller.draft().position, Position::Manager);
    assert_eq!(controller.draft().portfolio_url, "https://x.com");
}

#[test]
fn unknown_controls_leave_the_draft_untouched() {
    let mut controller = FormController::new();
    assert!(controller
        .handle_field_change("salary", "100", ControlKind::Input)
        .is_err());
    assert_eq!(controller.draft(), &ApplicationDraft::default());
}
