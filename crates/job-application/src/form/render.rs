use std::fmt::Write as _;

use serde::Serialize;

use super::controller::FormState;
use super::domain::{ApplicationDraft, FormField, Position, Skill};

pub const FORM_TITLE: &str = "Job Application";
pub const SUMMARY_TITLE: &str = "Application Summary";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Select,
    Number,
    Textarea,
    Checkbox,
    DatetimeLocal,
}

impl InputKind {
    fn for_field(field: FormField) -> Self {
        match field {
            FormField::FullName | FormField::PortfolioUrl => InputKind::Text,
            FormField::Email => InputKind::Email,
            FormField::PhoneNumber => InputKind::Tel,
            FormField::Position => InputKind::Select,
            FormField::RelevantExperience => InputKind::Number,
            FormField::ManagementExperience => InputKind::Textarea,
            FormField::AdditionalSkills => InputKind::Checkbox,
            FormField::InterviewTime => InputKind::DatetimeLocal,
        }
    }

    const fn attr(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Select => "select",
            InputKind::Number => "number",
            InputKind::Textarea => "textarea",
            InputKind::Checkbox => "checkbox",
            InputKind::DatetimeLocal => "datetime-local",
        }
    }
}

/// Select option or checkbox entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub input: InputKind,
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Editable form: the visible controls for the selected position, with inline errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
}

impl FormView {
    pub fn from_state(state: &FormState) -> Self {
        let draft = &state.draft;
        let fields = FormField::ALL
            .into_iter()
            .filter(|field| draft.position.shows(*field))
            .map(|field| FieldView {
                field,
                label: field.form_label(),
                input: InputKind::for_field(field),
                value: field_value(draft, field),
                options: field_options(draft, field),
                error: state.errors.get(field),
            })
            .collect();

        Self {
            title: FORM_TITLE,
            fields,
        }
    }

    pub fn field(&self, field: FormField) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<div class=\"container\">\n");
        let _ = writeln!(html, "  <h1>{}</h1>", escape_html(self.title));
        html.push_str("  <form method=\"post\" action=\"/\">\n");
        for field in &self.fields {
            render_field(&mut html, field);
        }
        html.push_str("    <button type=\"submit\">Submit</button>\n");
        html.push_str("  </form>\n</div>\n");
        html
    }
}

fn field_value(draft: &ApplicationDraft, field: FormField) -> String {
    match field {
        FormField::FullName => draft.full_name.clone(),
        FormField::Email => draft.email.clone(),
        FormField::PhoneNumber => draft.phone_number.clone(),
        FormField::Position => draft.position.label().to_string(),
        FormField::RelevantExperience => draft.relevant_experience.clone(),
        FormField::PortfolioUrl => draft.portfolio_url.clone(),
        FormField::ManagementExperience => draft.management_experience.clone(),
        FormField::AdditionalSkills => selected_skills(draft),
        FormField::InterviewTime => draft.interview_time.clone(),
    }
}

fn field_options(draft: &ApplicationDraft, field: FormField) -> Vec<OptionView> {
    match field {
        FormField::Position => Position::ALL
            .into_iter()
            .map(|position| OptionView {
                value: position.label(),
                label: position.label(),
                selected: position == draft.position,
            })
            .collect(),
        FormField::AdditionalSkills => Skill::ALL
            .into_iter()
            .map(|skill| OptionView {
                value: skill.key(),
                label: skill.label(),
                selected: draft.additional_skills.get(skill),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn selected_skills(draft: &ApplicationDraft) -> String {
    draft
        .additional_skills
        .selected()
        .map(Skill::key)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_field(html: &mut String, view: &FieldView) {
    let name = view.field.key();
    let value = escape_html(&view.value);
    let group_class = match view.input {
        InputKind::DatetimeLocal => "form-group date-time-picker",
        _ => "form-group",
    };

    let _ = writeln!(html, "    <div class=\"{group_class}\">");
    let _ = writeln!(html, "      <label>{}:</label>", escape_html(view.label));
    match view.input {
        InputKind::Select => {
            let _ = writeln!(html, "      <select name=\"{name}\">");
            for option in &view.options {
                let selected = if option.selected { " selected" } else { "" };
                let _ = writeln!(
                    html,
                    "        <option value=\"{}\"{selected}>{}</option>",
                    escape_html(option.value),
                    escape_html(option.label)
                );
            }
            html.push_str("      </select>\n");
        }
        InputKind::Textarea => {
            let _ = writeln!(html, "      <textarea name=\"{name}\">{value}</textarea>");
        }
        InputKind::Checkbox => {
            html.push_str("      <div class=\"checkbox-group\">\n");
            for option in &view.options {
                let checked = if option.selected { " checked" } else { "" };
                let _ = writeln!(
                    html,
                    "        <label><input type=\"checkbox\" name=\"{}\"{checked} /> {}</label>",
                    escape_html(option.value),
                    escape_html(option.label)
                );
            }
            html.push_str("      </div>\n");
        }
        input => {
            let _ = writeln!(
                html,
                "      <input type=\"{}\" name=\"{name}\" value=\"{value}\" />",
                input.attr()
            );
        }
    }
    if let Some(error) = view.error {
        let _ = writeln!(html, "      <p class=\"error\">{}</p>", escape_html(error));
    }
    html.push_str("    </div>\n");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
}

/// Read-only view of an accepted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub title: &'static str,
    pub lines: Vec<SummaryLine>,
}

impl SummaryView {
    pub fn from_draft(draft: &ApplicationDraft) -> Self {
        let lines = FormField::ALL
            .into_iter()
            .filter(|field| draft.position.shows(*field))
            .map(|field| SummaryLine {
                field,
                label: field.label(),
                value: summary_value(draft, field),
            })
            .collect();

        Self {
            title: SUMMARY_TITLE,
            lines,
        }
    }

    pub fn value(&self, field: FormField) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.field == field)
            .map(|line| line.value.as_str())
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{}", self.title);
        for line in &self.lines {
            let _ = writeln!(text, "{}: {}", line.label, line.value);
        }
        text
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<div class=\"container\">\n  <div class=\"summary\">\n");
        let _ = writeln!(html, "    <h2>{}</h2>", escape_html(self.title));
        for line in &self.lines {
            let _ = writeln!(
                html,
                "    <p><strong>{}:</strong> {}</p>",
                escape_html(line.label),
                escape_html(&line.value)
            );
        }
        html.push_str("  </div>\n</div>\n");
        html
    }
}

fn summary_value(draft: &ApplicationDraft, field: FormField) -> String {
    match field {
        FormField::PhoneNumber => draft.display_phone(),
        FormField::RelevantExperience => format!("{} years", draft.relevant_experience),
        other => field_value(draft, other),
    }
}

/// Whichever view the current phase shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedView {
    Form(FormView),
    Summary(SummaryView),
}

impl RenderedView {
    pub fn to_html(&self) -> String {
        match self {
            RenderedView::Form(view) => view.to_html(),
            RenderedView::Summary(view) => view.to_html(),
        }
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
