use crate::cli::ServeArgs;
use crate::infra::{build_coach_service, build_token_directory, AppState};
use crate::routes::with_coach_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ecofit::config::AppConfig;
use ecofit::error::AppError;
use ecofit::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let coach = build_coach_service(&config);
    let tokens = build_token_directory(&config);

    let app = with_coach_routes(coach, tokens)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "carbon coach ready");

    axum::serve(listener, app).await?;
    Ok(())
}
