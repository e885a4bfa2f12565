//! HTTP gateway (Axum) for rubric evaluation.
//!
//! This module is primarily used by the `rubric-eval` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, FieldError, GatewayError};
pub use handler::evaluate_feedback_handler;
pub use payload::{EvaluationRequest, EvaluationResponse, EvaluatorStatus, WelcomeResponse};
pub use state::HandlerState;

use crate::constants::WELCOME_MESSAGE;
use crate::judge::Judge;

pub fn create_router_with_state<J>(state: HandlerState<J>) -> Router
where
    J: Judge + 'static,
{
    Router::new()
        .route("/", get(root_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<J>))
        .route("/evaluate-feedback", post(evaluate_feedback_handler::<J>))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS for open development use: any origin, method and header,
/// with credentials. The request's own values are mirrored back because the
/// `*` wildcard is not valid alongside credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub judge: JudgeStatus,
}

#[derive(serde::Serialize)]
pub struct JudgeStatus {
    pub mode: &'static str,
    pub model: String,
    pub timeout_secs: f64,
}

#[tracing::instrument]
pub async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<J>(State(state): State<HandlerState<J>>) -> Response
where
    J: Judge + 'static,
{
    let judge = state.evaluator.judge();

    let body = ReadyResponse {
        status: "ok",
        judge: JudgeStatus {
            mode: judge.mode().as_str(),
            model: judge.model().to_string(),
            timeout_secs: state.evaluator.judge_timeout().as_secs_f64(),
        },
    };

    (StatusCode::OK, Json(body)).into_response()
}
