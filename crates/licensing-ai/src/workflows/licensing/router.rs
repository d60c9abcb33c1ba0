use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::CatalogRepository;
use super::domain::BusinessSubmission;
use super::evaluation::MatchedRequirement;
use super::report::NarrativeProvider;
use super::service::{LicensingService, ServiceError};

/// Body for the report endpoint: the validated-input shape plus the match
/// results the caller received earlier, forwarded unmodified in ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub business: BusinessSubmission,
    pub matched: Vec<MatchedRequirement>,
}

/// Router builder exposing the licensing HTTP endpoints.
pub fn licensing_router<C, N>(service: Arc<LicensingService<C, N>>) -> Router
where
    C: CatalogRepository + 'static,
    N: NarrativeProvider + 'static,
{
    Router::new()
        .route(
            "/api/v1/licensing/requirements",
            get(requirements_handler::<C, N>),
        )
        .route("/api/v1/licensing/match", post(match_handler::<C, N>))
        .route("/api/v1/licensing/report", post(report_handler::<C, N>))
        .with_state(service)
}

pub(crate) async fn match_handler<C, N>(
    State(service): State<Arc<LicensingService<C, N>>>,
    axum::Json(submission): axum::Json<BusinessSubmission>,
) -> Response
where
    C: CatalogRepository + 'static,
    N: NarrativeProvider + 'static,
{
    match service.match_requirements(submission) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn report_handler<C, N>(
    State(service): State<Arc<LicensingService<C, N>>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response
where
    C: CatalogRepository + 'static,
    N: NarrativeProvider + 'static,
{
    match service.report(request.business, &request.matched) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn requirements_handler<C, N>(
    State(service): State<Arc<LicensingService<C, N>>>,
) -> Response
where
    C: CatalogRepository + 'static,
    N: NarrativeProvider + 'static,
{
    match service.requirements() {
        Ok(catalog) => (StatusCode::OK, axum::Json(catalog)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
