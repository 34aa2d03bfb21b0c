use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod contact;
pub mod health;

pub(crate) fn error(code: StatusCode, detail: impl Into<String>) -> Response {
    (
        code,
        Json(ApiError {
            error: detail.into(),
        }),
    )
        .into_response()
}
