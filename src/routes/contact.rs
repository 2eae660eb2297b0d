use std::str::FromStr;

use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde::Deserialize;
use strum::VariantArray;
use voltedge_contact::{
    BudgetRange, Command, FormController, FormVariant, ServiceCategory, SqliteLeadStore,
    SubmitIntent,
};

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::routes::AppState;
use crate::template::{FormView, render};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub site: SiteConfig,
    pub form: FormView,
    pub services: &'static [ServiceCategory],
    pub budgets: &'static [BudgetRange],
    pub action: &'static str,
}

impl ContactTemplate {
    fn new(site: SiteConfig, form: FormView) -> Self {
        Self {
            site,
            form,
            services: ServiceCategory::VARIANTS,
            budgets: BudgetRange::VARIANTS,
            action: "/contact",
        }
    }
}

pub async fn page(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    render(ContactTemplate::new(
        app_state.config.site.clone(),
        FormView(FormController::new(FormVariant::Detailed)),
    ))
}

#[derive(Deserialize)]
pub struct DetailedInput {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service_interest: String,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub newsletter_signup: String,
}

/// One detailed-form lifecycle: collect fields into a fresh controller, run
/// validation, dispatch to the submission client on success, settle. Shared
/// by the contact and quote pages.
pub(crate) async fn run_detailed(
    command: &Command<SqliteLeadStore>,
    input: DetailedInput,
) -> FormController {
    // The selects only offer the closed enumerations; anything else came
    // from outside the UI and is treated as "nothing selected".
    let service_interest = if ServiceCategory::from_str(&input.service_interest).is_ok() {
        input.service_interest
    } else {
        String::new()
    };
    let budget_range = if BudgetRange::from_str(&input.budget_range).is_ok() {
        input.budget_range
    } else {
        String::new()
    };

    let mut controller = FormController::new(FormVariant::Detailed);
    controller.set_field("first_name", input.first_name);
    controller.set_field("last_name", input.last_name);
    controller.set_field("email", input.email);
    controller.set_field("phone", input.phone);
    controller.set_field("service_interest", service_interest);
    controller.set_field("budget_range", budget_range);
    controller.set_field("message", input.message);
    controller.set_field("newsletter_signup", input.newsletter_signup);

    match controller.submit_intent() {
        SubmitIntent::Dispatch { submission, ticket } => {
            let result = command.submit_contact_form(submission).await;
            controller.settle(ticket, result);
        }
        // Invalid: the controller settled with per-field errors.
        // InFlight cannot happen on a per-request controller.
        SubmitIntent::Invalid | SubmitIntent::InFlight => {}
    }

    controller
}

pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<DetailedInput>,
) -> Result<impl IntoResponse, AppError> {
    let controller = run_detailed(&app_state.command, input).await;
    render(ContactTemplate::new(
        app_state.config.site.clone(),
        FormView(controller),
    ))
}
