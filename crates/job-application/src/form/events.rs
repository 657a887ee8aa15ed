use serde::{Deserialize, Serialize};

use super::domain::{Position, Skill, TextField};
use super::phone::PhoneChange;

/// Kind of control that emitted a change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    #[default]
    Input,
    Checkbox,
}

/// Typed input event consumed by the form reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    TextChanged { field: TextField, value: String },
    PositionSelected { position: Position },
    SkillToggled { skill: Skill, checked: bool },
    PhoneChanged(PhoneChange),
    Submit,
}

impl FormEvent {
    /// Parse the `(name, value, kind)` triple a rendered control emits.
    pub fn from_control(name: &str, value: &str, kind: ControlKind) -> Result<Self, FormEventError> {
        match kind {
            ControlKind::Checkbox => {
                let skill = name.parse::<Skill>()?;
                let checked = parse_checked(value).ok_or_else(|| {
                    FormEventError::InvalidCheckboxValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    }
                })?;
                Ok(FormEvent::SkillToggled { skill, checked })
            }
            ControlKind::Input if name == "position" => Ok(FormEvent::PositionSelected {
                position: value.parse()?,
            }),
            ControlKind::Input => {
                let field = TextField::from_name(name)
                    .ok_or_else(|| FormEventError::UnknownField(name.to_string()))?;
                Ok(FormEvent::TextChanged {
                    field,
                    value: value.to_string(),
                })
            }
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            FormEvent::TextChanged { .. } => "text_changed",
            FormEvent::PositionSelected { .. } => "position_selected",
            FormEvent::SkillToggled { .. } => "skill_toggled",
            FormEvent::PhoneChanged(_) => "phone_changed",
            FormEvent::Submit => "submit",
        }
    }
}

fn parse_checked(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Raised when a control event names something the form does not render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormEventError {
    #[error("unknown form control '{0}'")]
    UnknownField(String),
    #[error("unknown skill checkbox '{0}'")]
    UnknownSkill(String),
    #[error("position must be one of Developer, Designer, Manager (found '{0}')")]
    InvalidPosition(String),
    #[error("checkbox '{name}' received non-boolean value '{value}'")]
    InvalidCheckboxValue { name: String, value: String },
}
