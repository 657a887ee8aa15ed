use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::events::FormEventError;

/// Role the applicant is applying for. Drives which conditional fields are shown and required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    pub const fn label(self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Conditional fields this position shows, and therefore requires.
    pub const fn conditional_fields(self) -> &'static [FormField] {
        match self {
            Position::Developer => &[FormField::RelevantExperience],
            Position::Designer => &[FormField::RelevantExperience, FormField::PortfolioUrl],
            Position::Manager => &[FormField::ManagementExperience],
        }
    }

    pub fn shows(self, field: FormField) -> bool {
        !field.is_conditional() || self.conditional_fields().contains(&field)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = FormEventError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.label() == value)
            .ok_or_else(|| FormEventError::InvalidPosition(value.to_string()))
    }
}

/// Checkbox options offered under "Additional Skills".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Javascript,
    Css,
    Python,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::Javascript, Skill::Css, Skill::Python];

    /// Control name, also used when listing selected skills in the summary.
    pub const fn key(self) -> &'static str {
        match self {
            Skill::Javascript => "javascript",
            Skill::Css => "css",
            Skill::Python => "python",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Skill::Javascript => "Javascript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
        }
    }
}

impl FromStr for Skill {
    type Err = FormEventError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.key() == value)
            .ok_or_else(|| FormEventError::UnknownSkill(value.to_string()))
    }
}

/// Fixed skill checklist; every skill always carries a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalSkills {
    pub javascript: bool,
    pub css: bool,
    pub python: bool,
}

impl AdditionalSkills {
    pub fn get(&self, skill: Skill) -> bool {
        match skill {
            Skill::Javascript => self.javascript,
            Skill::Css => self.css,
            Skill::Python => self.python,
        }
    }

    pub fn set(&mut self, skill: Skill, checked: bool) {
        let slot = match skill {
            Skill::Javascript => &mut self.javascript,
            Skill::Css => &mut self.css,
            Skill::Python => &mut self.python,
        };
        *slot = checked;
    }

    pub fn any(&self) -> bool {
        Skill::ALL.into_iter().any(|skill| self.get(skill))
    }

    /// Checked skills in checklist order.
    pub fn selected(&self) -> impl Iterator<Item = Skill> + '_ {
        Skill::ALL.into_iter().filter(|skill| self.get(*skill))
    }
}

/// Working state of the form between mount and submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub country_code: String,
    pub position: Position,
    pub relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: AdditionalSkills,
    pub interview_time: String,
}

impl ApplicationDraft {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::Email => &self.email,
            TextField::RelevantExperience => &self.relevant_experience,
            TextField::PortfolioUrl => &self.portfolio_url,
            TextField::ManagementExperience => &self.management_experience,
            TextField::InterviewTime => &self.interview_time,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::FullName => &mut self.full_name,
            TextField::Email => &mut self.email,
            TextField::RelevantExperience => &mut self.relevant_experience,
            TextField::PortfolioUrl => &mut self.portfolio_url,
            TextField::ManagementExperience => &mut self.management_experience,
            TextField::InterviewTime => &mut self.interview_time,
        };
        *slot = value;
    }

    /// Phone number as displayed in the summary, e.g. `+1 5551234567`.
    pub fn display_phone(&self) -> String {
        format!("+{} {}", self.country_code, self.phone_number)
    }
}

/// Every field the form displays, in display order. Also keys the validation error mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phoneNumber")]
    PhoneNumber,
    #[serde(rename = "position")]
    Position,
    #[serde(rename = "relevantExperience")]
    RelevantExperience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    #[serde(rename = "managementExperience")]
    ManagementExperience,
    #[serde(rename = "additionalSkills")]
    AdditionalSkills,
    #[serde(rename = "interviewTime")]
    InterviewTime,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::FullName,
        FormField::Email,
        FormField::PhoneNumber,
        FormField::Position,
        FormField::RelevantExperience,
        FormField::PortfolioUrl,
        FormField::ManagementExperience,
        FormField::AdditionalSkills,
        FormField::InterviewTime,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::PhoneNumber => "phoneNumber",
            FormField::Position => "position",
            FormField::RelevantExperience => "relevantExperience",
            FormField::PortfolioUrl => "portfolioURL",
            FormField::ManagementExperience => "managementExperience",
            FormField::AdditionalSkills => "additionalSkills",
            FormField::InterviewTime => "interviewTime",
        }
    }

    /// Label used in the summary view.
    pub const fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email",
            FormField::PhoneNumber => "Phone Number",
            FormField::Position => "Applying for Position",
            FormField::RelevantExperience => "Relevant Experience",
            FormField::PortfolioUrl => "Portfolio URL",
            FormField::ManagementExperience => "Management Experience",
            FormField::AdditionalSkills => "Additional Skills",
            FormField::InterviewTime => "Preferred Interview Time",
        }
    }

    /// Label used next to the editable control.
    pub const fn form_label(self) -> &'static str {
        match self {
            FormField::RelevantExperience => "Relevant Experience (years)",
            other => other.label(),
        }
    }

    pub const fn is_conditional(self) -> bool {
        matches!(
            self,
            FormField::RelevantExperience
                | FormField::PortfolioUrl
                | FormField::ManagementExperience
        )
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fields edited through plain inputs and replaced verbatim on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextField {
    FullName,
    Email,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    InterviewTime,
}

impl TextField {
    pub const ALL: [TextField; 6] = [
        TextField::FullName,
        TextField::Email,
        TextField::RelevantExperience,
        TextField::PortfolioUrl,
        TextField::ManagementExperience,
        TextField::InterviewTime,
    ];

    pub const fn field(self) -> FormField {
        match self {
            TextField::FullName => FormField::FullName,
            TextField::Email => FormField::Email,
            TextField::RelevantExperience => FormField::RelevantExperience,
            TextField::PortfolioUrl => FormField::PortfolioUrl,
            TextField::ManagementExperience => FormField::ManagementExperience,
            TextField::InterviewTime => FormField::InterviewTime,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        TextField::ALL
            .into_iter()
            .find(|field| field.field().key() == name)
    }
}
