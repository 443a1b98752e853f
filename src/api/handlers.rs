use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::instrument;

use crate::models::{IntakeError, IntakeReceipt};
use crate::services::IntakeService;
use crate::state::AppState;

impl IntakeError {
    pub fn status(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn respond(outcome: Result<IntakeReceipt, IntakeError>) -> Response {
    match outcome {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `POST /waitlist` with `{fullName, email, phone?}`.
///
/// The body is taken raw so that an unparseable payload maps to the
/// generic 500 rather than the extractor's own rejection.
#[instrument(name = "waitlist", skip_all, fields(len = body.len()))]
pub async fn join_waitlist(State(state): State<AppState>, body: Bytes) -> Response {
    let outcome = match IntakeService::decode(&body) {
        Ok(fields) => state.intake.submit_waitlist(&fields).await,
        Err(e) => Err(e),
    };
    respond(outcome)
}

/// `POST /beta` with `{name, email, reason, company?}`.
#[instrument(name = "beta", skip_all, fields(len = body.len()))]
pub async fn apply_beta(State(state): State<AppState>, body: Bytes) -> Response {
    let outcome = match IntakeService::decode(&body) {
        Ok(fields) => state.intake.submit_beta(&fields).await,
        Err(e) => Err(e),
    };
    respond(outcome)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub relay: &'static str,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        relay: state.intake.relay_name(),
    })
}
