use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::constants::EVALUATOR_STATUS_HEADER;
use crate::gateway::error::{FieldError, GatewayError};
use crate::gateway::payload::{EvaluationRequest, EvaluationResponse, EvaluatorStatus};
use crate::gateway::state::HandlerState;
use crate::judge::Judge;
use crate::rubric::Submission;

/// Required body fields, in the order they are reported.
pub(crate) const REQUIRED_FIELDS: [&str; 3] = ["question", "user_answer", "reference_answer"];

#[instrument(skip(state, body), fields(evaluation_id = tracing::field::Empty))]
pub async fn evaluate_feedback_handler<J>(
    State(state): State<HandlerState<J>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    J: Judge + 'static,
{
    let evaluation_id = uuid::Uuid::new_v4();
    tracing::Span::current().record("evaluation_id", tracing::field::display(&evaluation_id));

    let Json(body) = body.map_err(|rejection| {
        debug!(status = %rejection.status(), "Rejected request body");
        GatewayError::InvalidRequest(rejection.body_text())
    })?;

    let request = validate_request(&body)?;
    debug!(
        question_len = request.question.len(),
        user_answer_len = request.user_answer.len(),
        reference_answer_len = request.reference_answer.len(),
        "Evaluating submission"
    );

    let submission = Submission::from(request);
    let scorecard = state.evaluator.evaluate(&submission).await?;

    make_response(EvaluationResponse::from(scorecard))
}

pub(crate) fn make_response(body: EvaluationResponse) -> Result<Response, GatewayError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        EVALUATOR_STATUS_HEADER,
        HeaderValue::from_static(EvaluatorStatus::Scored.as_header_value()),
    );
    Ok((StatusCode::OK, headers, Json(body)).into_response())
}

/// Checks that every required field is present, a string, and not blank.
///
/// All failing fields are reported together. Unknown fields are ignored.
pub(crate) fn validate_request(body: &serde_json::Value) -> Result<EvaluationRequest, GatewayError> {
    let object = body.as_object().ok_or_else(|| {
        GatewayError::InvalidRequest("request body must be a JSON object".to_string())
    })?;

    let mut errors = Vec::new();
    let mut values = Vec::with_capacity(REQUIRED_FIELDS.len());

    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None | Some(serde_json::Value::Null) => {
                errors.push(FieldError::new(field, "field required"));
            }
            Some(serde_json::Value::String(s)) if s.trim().is_empty() => {
                errors.push(FieldError::new(field, "must not be empty"));
            }
            Some(serde_json::Value::String(s)) => values.push(s.clone()),
            Some(_) => errors.push(FieldError::new(field, "must be a string")),
        }
    }

    if !errors.is_empty() {
        return Err(GatewayError::Validation(errors));
    }

    let mut values = values.into_iter();
    match (values.next(), values.next(), values.next()) {
        (Some(question), Some(user_answer), Some(reference_answer)) => Ok(EvaluationRequest {
            question,
            user_answer,
            reference_answer,
        }),
        _ => Err(GatewayError::InvalidRequest(
            "request body is missing required fields".to_string(),
        )),
    }
}
