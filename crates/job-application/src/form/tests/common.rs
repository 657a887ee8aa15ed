use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::form::domain::{AdditionalSkills, ApplicationDraft, Position};
use crate::form::phone::FixedCountryAdapter;
use crate::form::session::FormSession;

/// Fully valid developer application.
pub(super) fn developer_draft() -> ApplicationDraft {
    ApplicationDraft {
        full_name: "Jane".to_string(),
        email: "j@x.com".to_string(),
        phone_number: "5551234567".to_string(),
        country_code: "1".to_string(),
        position: Position::Developer,
        relevant_experience: "3".to_string(),
        additional_skills: AdditionalSkills {
            javascript: true,
            ..AdditionalSkills::default()
        },
        interview_time: "2024-01-01T10:00".to_string(),
        ..ApplicationDraft::default()
    }
}

pub(super) fn designer_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: Position::Designer,
        portfolio_url: "https://x.com".to_string(),
        additional_skills: AdditionalSkills {
            css: true,
            ..AdditionalSkills::default()
        },
        ..developer_draft()
    }
}

pub(super) fn manager_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: Position::Manager,
        relevant_experience: String::new(),
        management_experience: "Led a team of eight for four years.".to_string(),
        additional_skills: AdditionalSkills {
            python: true,
            ..AdditionalSkills::default()
        },
        ..developer_draft()
    }
}

pub(super) fn session() -> Arc<FormSession<FixedCountryAdapter>> {
    Arc::new(FormSession::new(FixedCountryAdapter::with_dial_code("1")))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
