use super::handlers::generate_item_details::{
    __path_generate_item_details, generate_item_details,
};
use crate::application::{
    http::server::app_state::AppState, rate_limit_middleware::rate_limit_middleware,
};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_item_details))]
pub struct MenuItemApiDoc;

pub fn menu_item_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate-item-details", state.args.server.root_path),
            post(generate_item_details),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
}
