use serde::Serialize;

pub mod contact;

/// Error payload: `{"error": "..."}`. The message is always bounded and
/// user-safe; relay failure detail never leaves the server.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// Success payload: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}
