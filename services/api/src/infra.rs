use job_application::error::AppError;
use job_application::form::ApplicationDraft;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read a draft from a JSON file keyed by control names. Missing fields take mount defaults.
pub(crate) fn load_draft(path: &Path) -> Result<ApplicationDraft, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_draft(&raw)
}

pub(crate) fn parse_draft(raw: &str) -> Result<ApplicationDraft, AppError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_application::form::Position;

    #[test]
    fn partial_drafts_fill_defaults() {
        let draft = parse_draft(r#"{"fullName":"Jane","position":"Manager"}"#)
            .expect("draft parses");
        assert_eq!(draft.full_name, "Jane");
        assert_eq!(draft.position, Position::Manager);
        assert!(!draft.additional_skills.javascript);
        assert_eq!(draft.interview_time, "");
    }

    #[test]
    fn out_of_set_positions_are_rejected() {
        let err = parse_draft(r#"{"position":"Intern"}"#).expect_err("position is closed");
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn missing_files_surface_io_errors() {
        let err = load_draft(Path::new("does/not/exist.json")).expect_err("file is missing");
        assert!(matches!(err, AppError::Io(_)));
    }
}
