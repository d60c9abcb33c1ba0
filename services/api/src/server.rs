use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use licensing_ai::config::AppConfig;
use licensing_ai::error::AppError;
use licensing_ai::telemetry;
use licensing_ai::workflows::licensing::{FileCatalog, LicensingService, NoProvider};
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_licensing_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(FileCatalog::new(
        config.catalog.path.clone(),
        config.catalog.fallback.clone(),
    ));
    let licensing_service = Arc::new(LicensingService::new(catalog, NoProvider));

    let app = with_licensing_routes(licensing_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "business licensing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
