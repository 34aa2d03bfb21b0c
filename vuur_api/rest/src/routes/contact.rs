use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use vuur_core_contact_contracts::{ContactService, SubmitContactError};

use super::error;
use crate::models::{contact::ApiContactSubmission, ApiMessage};

/// Generic failure text returned for any relay fault. The underlying
/// reason is only ever logged server-side.
const DISPATCH_FAILED: &str = "Failed to send email. Please try again later.";

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactService>>,
    Json(submission): Json<ApiContactSubmission>,
) -> Response {
    match service.submit(submission.into()).await {
        Ok(()) => Json(ApiMessage {
            message: "Form submitted successfully.",
        })
        .into_response(),
        Err(err @ SubmitContactError::MissingRequiredFields) => {
            error(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(SubmitContactError::Send) => {
            tracing::error!("smtp relay refused the contact notification");
            error(StatusCode::INTERNAL_SERVER_ERROR, DISPATCH_FAILED)
        }
        Err(SubmitContactError::Other(err)) => {
            tracing::error!("failed to dispatch contact notification: {err:#}");
            error(StatusCode::INTERNAL_SERVER_ERROR, DISPATCH_FAILED)
        }
    }
}
