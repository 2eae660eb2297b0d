use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use sqlx::SqlitePool;
use voltedge_contact::{Command, SqliteLeadStore};

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::template::render;

mod about;
mod contact;
mod health;
mod index;
mod quote;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: Command<SqliteLeadStore>,
    pub pool: SqlitePool,
}

#[derive(askama::Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    site: SiteConfig,
}

pub async fn fallback(
    axum::extract::State(app_state): axum::extract::State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let page = render(NotFoundTemplate {
        site: app_state.config.site.clone(),
    })?;
    Ok((StatusCode::NOT_FOUND, page))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no template state required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page).post(index::action))
        .route("/about", get(about::page))
        .route("/services", get(services::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/quote", get(quote::page).post(quote::action))
        .fallback(fallback)
        .with_state(app_state)
}
