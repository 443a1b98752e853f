//! JSON intake API, mounted under `/api` by the server.
//!
//! `POST /waitlist`, `POST /beta` and `GET /health`. Every response carries
//! an `X-Request-Id` header, and the same id is recorded on the request's
//! trace span.

mod handlers;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{info_span, Span};
use uuid::Uuid;

use crate::state::AppState;

pub use handlers::{apply_beta, health, join_waitlist, HealthResponse};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request id, stored in the request extensions and echoed back in
/// [`REQUEST_ID_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

pub fn router<S>(state: AppState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/waitlist", post(join_waitlist))
        .route("/beta", post(apply_beta))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(middleware::from_fn(inject_request_id))
        .with_state(state)
}

// Runs outside the trace layer, so the id is in place before the span opens.
async fn inject_request_id(mut req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn request_span(req: &Request) -> Span {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map_or("-", |id| id.0.as_str());
    info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id
    )
}
