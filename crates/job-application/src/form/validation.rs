use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::domain::{ApplicationDraft, FormField};

pub const FULL_NAME_REQUIRED: &str = "Full Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Email is invalid.";
pub const PHONE_REQUIRED: &str = "Phone Number is required.";
pub const PHONE_NOT_NUMERIC: &str = "Phone Number must be a valid number.";
pub const EXPERIENCE_REQUIRED: &str = "Relevant Experience is required.";
pub const EXPERIENCE_NOT_POSITIVE: &str = "Relevant Experience must be a number greater than 0.";
pub const PORTFOLIO_REQUIRED: &str = "Portfolio URL is required.";
pub const PORTFOLIO_INVALID: &str = "Portfolio URL is invalid.";
pub const MANAGEMENT_REQUIRED: &str = "Management Experience is required.";
pub const SKILLS_REQUIRED: &str = "At least one skill must be selected.";
pub const INTERVIEW_TIME_REQUIRED: &str = "Preferred Interview Time is required.";

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

static PORTFOLIO_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://|www\.)[^\s$.?#].[^\s]*$").expect("portfolio pattern compiles")
});

/// Field-keyed messages produced by one validation pass. An absent key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Errors in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

type Rule = fn(&ApplicationDraft) -> Option<&'static str>;

/// One rule per field. Every rule runs on every pass.
const RULES: [(FormField, Rule); 8] = [
    (FormField::FullName, full_name),
    (FormField::Email, email),
    (FormField::PhoneNumber, phone_number),
    (FormField::RelevantExperience, relevant_experience),
    (FormField::PortfolioUrl, portfolio_url),
    (FormField::ManagementExperience, management_experience),
    (FormField::AdditionalSkills, additional_skills),
    (FormField::InterviewTime, interview_time),
];

/// Validate the whole draft against the rules for its selected position.
pub fn validate(draft: &ApplicationDraft) -> ValidationErrors {
    ValidationErrors(
        RULES
            .iter()
            .filter_map(|(field, rule)| rule(draft).map(|message| (*field, message)))
            .collect(),
    )
}

fn full_name(draft: &ApplicationDraft) -> Option<&'static str> {
    draft.full_name.is_empty().then_some(FULL_NAME_REQUIRED)
}

fn email(draft: &ApplicationDraft) -> Option<&'static str> {
    if draft.email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_SHAPE.is_match(&draft.email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn phone_number(draft: &ApplicationDraft) -> Option<&'static str> {
    if draft.phone_number.is_empty() {
        Some(PHONE_REQUIRED)
    } else if !draft.phone_number.chars().all(|c| c.is_ascii_digit()) {
        Some(PHONE_NOT_NUMERIC)
    } else {
        None
    }
}

fn relevant_experience(draft: &ApplicationDraft) -> Option<&'static str> {
    let raw = draft.relevant_experience.as_str();
    if raw.is_empty() && draft.position.shows(FormField::RelevantExperience) {
        return Some(EXPERIENCE_REQUIRED);
    }

    // Applies to every position, including ones that hide the field.
    match experience_years(raw) {
        Some(years) if years <= 0.0 => Some(EXPERIENCE_NOT_POSITIVE),
        _ => None,
    }
}

/// Numeric reading of the experience input, following browser number conversion: blank-but-present
/// input reads as zero, and only the exact `Infinity` spelling denotes an infinite value.
/// Empty and non-numeric input yields `None`.
pub fn experience_years(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.len() + 1 < trimmed.len() {
        return None;
    }
    match unsigned.to_ascii_lowercase().as_str() {
        "inf" | "infinity" | "nan" if unsigned != "Infinity" => return None,
        _ => {}
    }

    trimmed.parse::<f64>().ok().filter(|years| !years.is_nan())
}

fn portfolio_url(draft: &ApplicationDraft) -> Option<&'static str> {
    let url = draft.portfolio_url.as_str();
    if url.is_empty() {
        draft
            .position
            .shows(FormField::PortfolioUrl)
            .then_some(PORTFOLIO_REQUIRED)
    } else if !PORTFOLIO_SHAPE.is_match(url) {
        Some(PORTFOLIO_INVALID)
    } else {
        None
    }
}

fn management_experience(draft: &ApplicationDraft) -> Option<&'static str> {
    (draft.management_experience.is_empty()
        && draft.position.shows(FormField::ManagementExperience))
    .then_some(MANAGEMENT_REQUIRED)
}

fn additional_skills(draft: &ApplicationDraft) -> Option<&'static str> {
    (!draft.additional_skills.any()).then_some(SKILLS_REQUIRED)
}

fn interview_time(draft: &ApplicationDraft) -> Option<&'static str> {
    draft.interview_time.is_empty().then_some(INTERVIEW_TIME_REQUIRED)
}
