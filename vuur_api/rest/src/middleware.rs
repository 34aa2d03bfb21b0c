//! Request instrumentation: per-request ids, tracing spans, and panic
//! recovery.

use std::{any::Any, time::Duration};

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{info, Span};
use uuid::Uuid;

use crate::routes::error;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps the router, innermost first: the id must exist before the trace
/// span reads it, and panic recovery covers both.
pub fn apply<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(())
                .on_response(log_response)
                .on_body_chunk(())
                .on_eos(())
                .on_failure(()),
        )
        .layer(from_fn(assign_request_id))
        .layer(CatchPanicLayer::custom(panic_response))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RequestId(Uuid);

async fn assign_request_id(mut request: Request, next: Next) -> Response {
    let id = RequestId(Uuid::now_v7());
    request.extensions_mut().insert(id);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id.0.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn request_span(request: &Request) -> Span {
    let id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.to_string())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        %id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn log_response(response: &Response, latency: Duration, _span: &Span) {
    info!(status = %response.status(), ?latency, "request completed")
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("opaque panic payload");
    tracing::error!("request handler panicked: {detail}");

    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, routing};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    async fn boom() {
        panic!("relay config poisoned")
    }

    fn router() -> Router<()> {
        apply(Router::new().route("/boom", routing::get(boom)))
    }

    #[tokio::test]
    async fn panicking_handler_maps_to_a_generic_500() {
        // Act
        let response = router()
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&bytes).unwrap(),
            json!({"error": "Internal server error"})
        );
    }

    #[tokio::test]
    async fn responses_carry_a_request_id_header() {
        // Arrange
        let router = apply(Router::new().route("/ok", routing::get(|| async { "ok" })));

        // Act
        let response = router
            .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Assert
        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        Uuid::parse_str(id.to_str().unwrap()).unwrap();
    }
}
