use std::time::Duration;

use thiserror::Error;

use crate::rubric::Rubric;

/// Failures of a single judge call. Any of these fails the whole evaluation.
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("judge unreachable for {rubric}: {message}")]
    Unreachable { rubric: Rubric, message: String },

    #[error("judge timed out for {rubric} after {}s", .timeout.as_secs_f64())]
    Timeout { rubric: Rubric, timeout: Duration },

    #[error("malformed judge output for {rubric}: {reason}")]
    MalformedOutput { rubric: Rubric, reason: String },

    #[error("judge score for {rubric} is not a number: '{raw}'")]
    InvalidScore { rubric: Rubric, raw: String },

    #[error("judge score for {rubric} is out of range: {score}")]
    ScoreOutOfRange { rubric: Rubric, score: f64 },
}

impl JudgeError {
    /// The rubric whose call failed.
    pub fn rubric(&self) -> Rubric {
        match self {
            JudgeError::Unreachable { rubric, .. }
            | JudgeError::Timeout { rubric, .. }
            | JudgeError::MalformedOutput { rubric, .. }
            | JudgeError::InvalidScore { rubric, .. }
            | JudgeError::ScoreOutOfRange { rubric, .. } => *rubric,
        }
    }

    /// Returns `true` for [`JudgeError::Timeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, JudgeError::Timeout { .. })
    }
}
