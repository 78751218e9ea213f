use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

use ecofit::auth::TokenDirectory;
use ecofit::coach::{CoachService, CoachTables, ThreadRngPicker};
use ecofit::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the lookup tables once and wires them into the coach service.
pub(crate) fn build_coach_service(config: &AppConfig) -> Arc<CoachService<ThreadRngPicker>> {
    let tables = CoachTables::standard();
    for gap in tables.coverage_gaps() {
        warn!(%gap, "coach table coverage gap");
    }

    Arc::new(CoachService::new(
        Arc::new(tables),
        config.coach,
        Arc::new(ThreadRngPicker),
    ))
}

pub(crate) fn build_token_directory(config: &AppConfig) -> Arc<TokenDirectory> {
    Arc::new(TokenDirectory::from_config(&config.auth))
}
