use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use voltedge_contact::MSG_UNEXPECTED;

/// Failures a page handler can surface. The submission client swallows every
/// pipeline error into a [`voltedge_contact::SubmissionResult`], so rendering
/// is the only fallible step left in a handler.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    error_title: String,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::TemplateError(err) = self;
        tracing::error!("Template render error: {:?}", err);

        let template = ErrorPageTemplate {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            error_title: "Internal Server Error".to_string(),
            error_message: MSG_UNEXPECTED.to_string(),
        };

        match template.render() {
            Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_UNEXPECTED).into_response()
            }
        }
    }
}
