use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde::Deserialize;
use voltedge_contact::{FormController, FormVariant, SubmitIntent};

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::routes::AppState;
use crate::template::{FormView, render};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: SiteConfig,
    pub form: FormView,
}

pub async fn page(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    render(IndexTemplate {
        site: app_state.config.site.clone(),
        form: FormView(FormController::new(FormVariant::Quick)),
    })
}

#[derive(Deserialize)]
pub struct QuickInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<QuickInput>,
) -> Result<impl IntoResponse, AppError> {
    let mut controller = FormController::new(FormVariant::Quick);
    controller.set_field("name", input.name);
    controller.set_field("email", input.email);
    controller.set_field("message", input.message);

    match controller.submit_intent() {
        SubmitIntent::Dispatch { submission, ticket } => {
            let result = app_state.command.submit_quick(submission).await;
            controller.settle(ticket, result);
        }
        SubmitIntent::Invalid | SubmitIntent::InFlight => {}
    }

    render(IndexTemplate {
        site: app_state.config.site.clone(),
        form: FormView(controller),
    })
}
