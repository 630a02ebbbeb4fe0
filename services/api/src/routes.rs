use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use readiness_assessor::assessment::{
    assessment_router, AnswerSheetImporter, AssessmentEcho, AssessmentEngine,
    AssessmentRepository, AssessmentResult, AssessmentService, Framework, Locale,
};
use readiness_assessor::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

/// Answer sheet posted inline as CSV text.
#[derive(Debug, Deserialize)]
pub(crate) struct AnswerSheetRequest {
    pub(crate) framework: String,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    pub(crate) csv: String,
    #[serde(default, alias = "title")]
    pub(crate) technology_title: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnswerSheetResponse {
    pub(crate) framework: Framework,
    pub(crate) catalog_version: String,
    pub(crate) result: AssessmentResult,
}

pub(crate) fn with_assessment_routes<R>(
    service: Arc<AssessmentService<R>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
{
    let engine = service.engine().clone();
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assess/sheet",
            axum::routing::post(answer_sheet_endpoint),
        )
        .layer(Extension(engine))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Score a CSV answer sheet without storing it.
pub(crate) async fn answer_sheet_endpoint(
    Extension(engine): Extension<AssessmentEngine>,
    Json(payload): Json<AnswerSheetRequest>,
) -> Result<Json<AnswerSheetResponse>, AppError> {
    let AnswerSheetRequest {
        framework,
        locale,
        csv,
        technology_title,
        description,
    } = payload;

    let framework = Framework::from_key(&framework)?;
    let locale = locale
        .as_deref()
        .map(Locale::resolve)
        .unwrap_or(Locale::PRIMARY);
    let levels = engine.catalog().levels(framework, locale);

    let reader = Cursor::new(csv.into_bytes());
    let answers = AnswerSheetImporter::from_reader(reader, framework, levels)?;
    let echo = AssessmentEcho::new(technology_title, description, locale);
    let result = engine.evaluate(framework, &answers, echo)?;

    Ok(Json(AnswerSheetResponse {
        framework,
        catalog_version: engine.catalog().version().to_string(),
        result,
    }))
}
