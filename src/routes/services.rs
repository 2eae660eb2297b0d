use axum::{extract::State, response::IntoResponse};
use strum::VariantArray;
use voltedge_contact::ServiceCategory;

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::routes::AppState;
use crate::template::render;

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub site: SiteConfig,
    pub services: &'static [ServiceCategory],
}

pub async fn page(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    render(ServicesTemplate {
        site: app_state.config.site.clone(),
        services: ServiceCategory::VARIANTS,
    })
}
