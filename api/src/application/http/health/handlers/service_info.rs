use axum::extract::State;
use menucraft_core::domain::health::{entities::ServiceInfo, ports::HealthCheckService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service banner",
    responses(
        (status = 200, body = ServiceInfo)
    )
)]
pub async fn service_info(State(state): State<AppState>) -> Response<ServiceInfo> {
    Response::OK(state.service.service_info())
}
