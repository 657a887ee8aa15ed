//! End-to-end scenarios driven through the public controller facade, the way a rendered widget
//! feeds it: control events in, views out.

use job_application::form::{
    validate, ApplicationDraft, ControlKind, CountryDescriptor, EventOutcome, FixedCountryAdapter,
    FormController, FormField, PhoneInputAdapter, Position, RenderedView,
};

fn type_into(controller: &mut FormController, name: &str, value: &str) {
    let outcome = controller
        .handle_field_change(name, value, ControlKind::Input)
        .expect("control is rendered by the form");
    assert_eq!(outcome, EventOutcome::Updated);
}

fn tick(controller: &mut FormController, skill: &str) {
    controller
        .handle_field_change(skill, "true", ControlKind::Checkbox)
        .expect("checkbox is rendered by the form");
}

#[test]
fn developer_application_reaches_summary() {
    let mut controller = FormController::new();
    let phone = FixedCountryAdapter::with_dial_code("1");

    type_into(&mut controller, "fullName", "Jane");
    type_into(&mut controller, "email", "j@x.com");
    let change = phone.detect("555-123-4567");
    controller.handle_phone_change(&change.raw, &change.country);
    type_into(&mut controller, "position", "Developer");
    type_into(&mut controller, "relevantExperience", "3");
    tick(&mut controller, "javascript");
    type_into(&mut controller, "interviewTime", "2024-01-01T10:00");

    assert!(validate(controller.draft()).is_empty());
    assert_eq!(controller.handle_submit(), EventOutcome::Accepted);

    let summary = controller.summary().expect("submitted form has a summary");
    assert_eq!(summary.value(FormField::FullName), Some("Jane"));
    assert_eq!(summary.value(FormField::PhoneNumber), Some("+1 5551234567"));
    assert_eq!(summary.value(FormField::RelevantExperience), Some("3 years"));
    assert_eq!(summary.value(FormField::AdditionalSkills), Some("javascript"));
    assert_eq!(summary.value(FormField::PortfolioUrl), None);
    assert_eq!(summary.value(FormField::ManagementExperience), None);

    match controller.view() {
        RenderedView::Summary(view) => assert_eq!(view, summary),
        RenderedView::Form(_) => panic!("submitted form must render its summary"),
    }
}

#[test]
fn designer_fixes_errors_then_submits() {
    let mut controller = FormController::new();
    type_into(&mut controller, "fullName", "Ada");
    type_into(&mut controller, "email", "ada@studio.io");
    controller.handle_phone_change("+44 7700 900123", &CountryDescriptor::with_dial_code("44"));
    type_into(&mut controller, "position", "Designer");
    type_into(&mut controller, "relevantExperience", "0");
    type_into(&mut controller, "portfolioURL", "ftp://ada");
    tick(&mut controller, "css");
    type_into(&mut controller, "interviewTime", "2024-02-02T09:30");

    assert_eq!(
        controller.handle_submit(),
        EventOutcome::Rejected { errors: 2 }
    );
    assert_eq!(
        controller.errors().get(FormField::RelevantExperience),
        Some("Relevant Experience must be a number greater than 0.")
    );
    assert_eq!(
        controller.errors().get(FormField::PortfolioUrl),
        Some("Portfolio URL is invalid.")
    );

    type_into(&mut controller, "relevantExperience", "4");
    type_into(&mut controller, "portfolioURL", "www.ada.design");
    assert_eq!(controller.handle_submit(), EventOutcome::Accepted);

    let summary = controller.summary().expect("summary available");
    assert_eq!(summary.value(FormField::Position), Some("Designer"));
    assert_eq!(summary.value(FormField::PortfolioUrl), Some("www.ada.design"));
    assert_eq!(summary.value(FormField::PhoneNumber), Some("+44 447700900123"));
}

#[test]
fn manager_with_hidden_negative_experience_is_rejected() {
    let draft = ApplicationDraft {
        full_name: "Sam".to_string(),
        email: "sam@corp.com".to_string(),
        phone_number: "5550001111".to_string(),
        country_code: "1".to_string(),
        position: Position::Developer,
        relevant_experience: "-1".to_string(),
        ..ApplicationDraft::default()
    };
    let mut controller = FormController::from_draft(draft);
    type_into(&mut controller, "position", "Manager");
    type_into(&mut controller, "managementExperience", "Ran ops for a decade.");
    tick(&mut controller, "python");
    type_into(&mut controller, "interviewTime", "2024-03-03T14:00");

    assert_eq!(
        controller.handle_submit(),
        EventOutcome::Rejected { errors: 1 }
    );
    assert!(controller.errors().contains(FormField::RelevantExperience));

    type_into(&mut controller, "relevantExperience", "");
    assert_eq!(controller.handle_submit(), EventOutcome::Accepted);
    let summary = controller.summary().expect("summary available");
    assert_eq!(
        summary.value(FormField::ManagementExperience),
        Some("Ran ops for a decade.")
    );
    assert_eq!(summary.value(FormField::RelevantExperience), None);
}
