use super::handlers::{
    health_check::{__path_health_check, health_check},
    service_info::{__path_service_info, service_info},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(service_info, health_check))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/", root_path), get(service_info))
        .route(&format!("{}/health", root_path), get(health_check))
}
