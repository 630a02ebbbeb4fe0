use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::AssessmentError;
use super::engine::AssessmentRequest;
use super::repository::{AssessmentRepository, SessionId};
use super::service::{AssessmentServiceError, AssessmentService};

/// Router exposing question content, scoring, and stored assessments.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/questions/:framework/:locale",
            get(questions_handler::<R>),
        )
        .route("/api/v1/assess", post(assess_handler::<R>))
        .route(
            "/api/v1/assessments/:session_id",
            get(assessment_handler::<R>),
        )
        .route("/api/v1/statistics", get(statistics_handler::<R>))
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path((framework, locale)): Path<(String, String)>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.questions(&framework, &locale) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.submit(&request) {
        Ok(record) => {
            let payload = json!({
                "session_id": record.session_id,
                "assessed_at": record.assessed_at,
                "result": record.result,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assessment_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.summary_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn statistics_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.statistics() {
        Ok(statistics) => (StatusCode::OK, axum::Json(statistics)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let (status, kind) = match &error {
        AssessmentServiceError::Assessment(inner @ AssessmentError::InvalidFramework(_)) => {
            (StatusCode::BAD_REQUEST, inner.kind())
        }
        AssessmentServiceError::Assessment(inner @ AssessmentError::MalformedAnswers(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, inner.kind())
        }
        AssessmentServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        AssessmentServiceError::Repository(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "repository_unavailable")
        }
    };

    let payload = json!({
        "error": error.to_string(),
        "kind": kind,
    });
    (status, axum::Json(payload)).into_response()
}
