use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use calc_service::config::load_config;
use calc_service::core::error::AppError;
use calc_service::core::logging::init_logging;
use calc_service::features::calculator::CalculatorService;
use calc_service::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = load_config()?;
    let _log_guards = init_logging(&config)?;

    let app_state = AppState::new(Arc::new(CalculatorService::new()));
    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, environment = ?config.environment, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}
