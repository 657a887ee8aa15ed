use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_host_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_application::config::AppConfig;
use job_application::error::AppError;
use job_application::form::{FixedCountryAdapter, FormSession};
use job_application::telemetry;
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

    let phone = FixedCountryAdapter::with_dial_code(config.form.default_dial_code.clone());
    let session = Arc::new(FormSession::new(phone));

    let app = with_host_routes(session)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        dial_code = %config.form.default_dial_code,
        "job application form ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
