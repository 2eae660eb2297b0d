use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use strum::VariantArray;
use voltedge_contact::{BudgetRange, FormController, FormVariant, ServiceCategory};

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::routes::AppState;
use crate::routes::contact::{DetailedInput, run_detailed};
use crate::template::{FormView, render};

#[derive(askama::Template)]
#[template(path = "quote.html")]
pub struct QuoteTemplate {
    pub site: SiteConfig,
    pub form: FormView,
    pub services: &'static [ServiceCategory],
    pub budgets: &'static [BudgetRange],
    pub action: &'static str,
}

impl QuoteTemplate {
    fn new(site: SiteConfig, form: FormView) -> Self {
        Self {
            site,
            form,
            services: ServiceCategory::VARIANTS,
            budgets: BudgetRange::VARIANTS,
            action: "/quote",
        }
    }
}

pub async fn page(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    render(QuoteTemplate::new(
        app_state.config.site.clone(),
        FormView(FormController::new(FormVariant::Detailed)),
    ))
}

pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<DetailedInput>,
) -> Result<impl IntoResponse, AppError> {
    let controller = run_detailed(&app_state.command, input).await;
    render(QuoteTemplate::new(
        app_state.config.site.clone(),
        FormView(controller),
    ))
}
