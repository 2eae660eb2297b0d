use axum::{extract::State, response::IntoResponse};

use crate::error::AppError;

use crate::config::SiteConfig;
use crate::routes::AppState;
use crate::template::render;

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub site: SiteConfig,
}

pub async fn page(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    render(AboutTemplate {
        site: app_state.config.site.clone(),
    })
}
