use axum::{Extension, extract::State};
use menucraft_core::domain::{
    common::entities::app_errors::CoreError,
    menu_item::{
        entities::MenuItemDetails,
        ports::MenuItemService,
        value_objects::{GenerateItemDetailsInput, ItemName},
    },
};
use tracing::warn;

use crate::application::{
    http::{
        menu_item::validators::GenerateItemDetailsRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    rate_limit_middleware::ClientAddress,
};

#[utoipa::path(
    post,
    path = "/generate-item-details",
    tag = "menu-item",
    summary = "Generate menu description and upsell",
    description = "Generates a menu description (at most 30 words) and an upsell suggestion for a food item. Limited to a fixed number of requests per minute per client.",
    responses(
        (status = 200, body = MenuItemDetails),
        (status = 400, body = ApiErrorResponse, description = "Invalid item name or model version"),
        (status = 429, body = ApiErrorResponse, description = "Rate limit exceeded"),
        (status = 503, body = ApiErrorResponse, description = "AI service unavailable")
    ),
    request_body = GenerateItemDetailsRequest
)]
pub async fn generate_item_details(
    State(state): State<AppState>,
    Extension(ClientAddress(client)): Extension<ClientAddress>,
    ValidateJson(payload): ValidateJson<GenerateItemDetailsRequest>,
) -> Result<Response<MenuItemDetails>, ApiError> {
    let model_version = payload.model_version.unwrap_or_default();
    let item_name = ItemName::parse(&payload.item_name).map_err(ApiError::from)?;

    let result = state
        .service
        .generate_item_details(GenerateItemDetailsInput {
            item_name,
            model_version,
        })
        .await;

    match result {
        Ok(details) => Ok(Response::OK(details)),
        Err(CoreError::MalformedResponse(reason)) => {
            warn!(client = %client, %reason, "serving fallback details");
            Ok(Response::OK(MenuItemDetails::fallback(model_version)))
        }
        Err(e) => Err(ApiError::from(e)),
    }
}
