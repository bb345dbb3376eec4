use axum::extract::State;
use menucraft_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Detailed health check",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Response<HealthStatus>, ApiError> {
    let status = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
