use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::controller::EventOutcome;
use super::events::ControlKind;
use super::phone::{CountryDescriptor, PhoneInputAdapter};
use super::session::{FormSession, FormSnapshot};

/// Payload emitted by a rendered control.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldChangeRequest {
    pub name: String,
    pub value: ControlValue,
    #[serde(default)]
    pub control: ControlKind,
}

/// Checkbox clients may send a JSON boolean; every other control sends text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Flag(bool),
    Text(String),
}

impl ControlValue {
    fn as_text(&self) -> &str {
        match self {
            ControlValue::Flag(true) => "true",
            ControlValue::Flag(false) => "false",
            ControlValue::Text(value) => value,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneChangeRequest {
    pub value: String,
    #[serde(default)]
    pub country: Option<CountryDescriptor>,
}

#[derive(Debug, Serialize)]
struct EventResponse {
    #[serde(flatten)]
    outcome: EventOutcome,
    form: FormSnapshot,
}

/// Router builder exposing the widget over HTTP.
pub fn form_router<P>(session: Arc<FormSession<P>>) -> Router
where
    P: PhoneInputAdapter + 'static,
{
    Router::new()
        .route("/", get(page_handler::<P>).post(page_submit_handler::<P>))
        .route("/api/v1/form", get(snapshot_handler::<P>))
        .route("/api/v1/form/fields", post(field_handler::<P>))
        .route("/api/v1/form/phone", post(phone_handler::<P>))
        .route("/api/v1/form/submit", post(submit_handler::<P>))
        .route("/api/v1/form/summary", get(summary_handler::<P>))
        .with_state(session)
}

pub(crate) async fn page_handler<P>(State(session): State<Arc<FormSession<P>>>) -> Html<String>
where
    P: PhoneInputAdapter + 'static,
{
    Html(session.html())
}

/// Native form post: apply every posted control, submit, and re-render the page.
pub(crate) async fn page_submit_handler<P>(
    State(session): State<Arc<FormSession<P>>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response
where
    P: PhoneInputAdapter + 'static,
{
    match session.submit_form(&pairs) {
        Ok((outcome, form)) => {
            let status = match outcome {
                EventOutcome::Updated | EventOutcome::Accepted => StatusCode::OK,
                EventOutcome::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                EventOutcome::Ignored => StatusCode::CONFLICT,
            };
            (status, Html(form.view.to_html())).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn snapshot_handler<P>(State(session): State<Arc<FormSession<P>>>) -> Response
where
    P: PhoneInputAdapter + 'static,
{
    (StatusCode::OK, axum::Json(session.snapshot())).into_response()
}

pub(crate) async fn field_handler<P>(
    State(session): State<Arc<FormSession<P>>>,
    axum::Json(request): axum::Json<FieldChangeRequest>,
) -> Response
where
    P: PhoneInputAdapter + 'static,
{
    match session.change_field(&request.name, request.value.as_text(), request.control) {
        Ok((outcome, form)) => event_response(outcome, form),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn phone_handler<P>(
    State(session): State<Arc<FormSession<P>>>,
    axum::Json(request): axum::Json<PhoneChangeRequest>,
) -> Response
where
    P: PhoneInputAdapter + 'static,
{
    let (outcome, form) = session.change_phone(&request.value, request.country);
    event_response(outcome, form)
}

pub(crate) async fn submit_handler<P>(State(session): State<Arc<FormSession<P>>>) -> Response
where
    P: PhoneInputAdapter + 'static,
{
    let (outcome, form) = session.submit();
    event_response(outcome, form)
}

pub(crate) async fn summary_handler<P>(State(session): State<Arc<FormSession<P>>>) -> Response
where
    P: PhoneInputAdapter + 'static,
{
    match session.summary() {
        Some(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        None => {
            let payload = json!({
                "error": "application has not been submitted",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
    }
}

fn event_response(outcome: EventOutcome, form: FormSnapshot) -> Response {
    let status = match outcome {
        EventOutcome::Updated | EventOutcome::Accepted => StatusCode::OK,
        EventOutcome::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EventOutcome::Ignored => {
            let payload = json!({
                "error": "application already submitted",
                "form": form,
            });
            return (StatusCode::CONFLICT, axum::Json(payload)).into_response();
        }
    };

    (status, axum::Json(EventResponse { outcome, form })).into_response()
}
