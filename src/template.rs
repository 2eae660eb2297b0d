use axum::response::Html;
use voltedge_contact::{FormController, FormState, Settled};

use crate::error::AppError;

/// Render an askama template; failures bubble up as [`AppError`] and land on
/// the error page.
pub fn render<T: askama::Template>(template: T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

/// Read-only view over a [`FormController`] with the accessors the templates
/// need: entered values, per-field errors and the settled banner.
pub struct FormView(pub FormController);

impl FormView {
    pub fn value(&self, name: &str) -> &str {
        self.0.field(name)
    }

    pub fn error(&self, name: &str) -> &str {
        self.0
            .field_errors()
            .get(name)
            .copied()
            .unwrap_or_default()
    }

    pub fn has_banner(&self) -> bool {
        self.0.result().is_some()
    }

    pub fn banner_success(&self) -> bool {
        self.0.state() == FormState::Settled(Settled::Success)
    }

    pub fn banner_text(&self) -> &str {
        self.0.result().map(|r| r.text()).unwrap_or_default()
    }

    pub fn pending(&self) -> bool {
        self.0.state() == FormState::Pending
    }
}
