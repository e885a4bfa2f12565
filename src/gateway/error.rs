use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::EVALUATOR_STATUS_HEADER;
use crate::judge::JudgeError;

use super::payload::EvaluatorStatus;

/// One failed field of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("upstream judge error: {0}")]
    Judge(#[from] JudgeError),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detail: Vec<FieldError>,
}

impl GatewayError {
    fn status(&self) -> (StatusCode, EvaluatorStatus) {
        match self {
            GatewayError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, EvaluatorStatus::InvalidRequest)
            }
            GatewayError::Validation(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                EvaluatorStatus::InvalidRequest,
            ),
            GatewayError::Judge(e) if e.is_timeout() => {
                (StatusCode::GATEWAY_TIMEOUT, EvaluatorStatus::JudgeTimeout)
            }
            GatewayError::Judge(_) => (StatusCode::BAD_GATEWAY, EvaluatorStatus::JudgeError),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, evaluator_status) = self.status();
        let error = self.to_string();

        let detail = match self {
            GatewayError::Validation(fields) => fields,
            _ => Vec::new(),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            EVALUATOR_STATUS_HEADER,
            HeaderValue::from_static(evaluator_status.as_header_value()),
        );

        let body = Json(ErrorResponse {
            error,
            code: status.as_u16(),
            detail,
        });

        (status, headers, body).into_response()
    }
}
