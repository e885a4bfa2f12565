use serde::{Deserialize, Serialize};

use crate::evaluation::Scorecard;
use crate::rubric::Submission;

/// Body of `POST /evaluate-feedback` after validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub question: String,
    pub user_answer: String,
    pub reference_answer: String,
}

impl From<EvaluationRequest> for Submission {
    fn from(req: EvaluationRequest) -> Self {
        Submission::new(req.question, req.user_answer, req.reference_answer)
    }
}

/// Success body of `POST /evaluate-feedback`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EvaluationResponse {
    pub completeness: f64,
    pub clarity: f64,
    pub technical_accuracy: f64,
}

impl From<Scorecard> for EvaluationResponse {
    fn from(scorecard: Scorecard) -> Self {
        Self {
            completeness: scorecard.completeness,
            clarity: scorecard.clarity,
            technical_accuracy: scorecard.technical_accuracy,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Value of the `x-evaluator-status` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorStatus {
    Scored,
    InvalidRequest,
    JudgeError,
    JudgeTimeout,
}

impl EvaluatorStatus {
    pub fn as_header_value(&self) -> &'static str {
        match self {
            EvaluatorStatus::Scored => "scored",
            EvaluatorStatus::InvalidRequest => "invalid_request",
            EvaluatorStatus::JudgeError => "judge_error",
            EvaluatorStatus::JudgeTimeout => "judge_timeout",
        }
    }
}
