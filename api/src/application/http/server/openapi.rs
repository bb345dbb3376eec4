use crate::application::http::{
    health::router::HealthApiDoc, menu_item::router::MenuItemApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menucraft API",
        description = "Generate menu descriptions and upsell suggestions using AI"
    ),
    tags(
        (name = "menu-item", description = "Menu copy generation"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The full document: base info merged with every route group.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(MenuItemApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
