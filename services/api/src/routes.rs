use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use licensing_ai::workflows::licensing::{
    licensing_router, CatalogRepository, LicensingService, NarrativeProvider,
};
use serde::Serialize;
use serde_json::json;

use crate::infra::AppState;

/// Payload for the narrative provider status endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AiStatusResponse {
    pub(crate) provider: String,
}

pub(crate) fn with_licensing_routes<C, N>(service: Arc<LicensingService<C, N>>) -> axum::Router
where
    C: CatalogRepository + 'static,
    N: NarrativeProvider + 'static,
{
    let status = AiStatusResponse {
        provider: service.provider_name().to_string(),
    };

    licensing_router(service)
        .route(
            "/api/v1/licensing/status",
            axum::routing::get(move || {
                let status = status.clone();
                async move { Json(status) }
            }),
        )
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
