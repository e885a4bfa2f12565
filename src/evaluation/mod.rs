//! Rubric evaluation: one judge call per rubric, all-or-nothing.
//!
//! [`EvaluationService::evaluate`] fans out the three rubric calls concurrently
//! and fans in once all of them succeed. The first failure (including a call
//! exceeding the per-call timeout) cancels the others and is returned as-is.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::Scorecard;

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::judge::{Judge, JudgeError, Verdict};
use crate::rubric::{CLARITY, COMPLETENESS, RubricDefinition, Submission, TECHNICAL_ACCURACY};

pub struct EvaluationService<J: Judge> {
    judge: J,
    judge_timeout: Duration,
}

impl<J: Judge> std::fmt::Debug for EvaluationService<J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationService")
            .field("judge_mode", &self.judge.mode())
            .field("judge_model", &self.judge.model())
            .field("judge_timeout", &self.judge_timeout)
            .finish()
    }
}

impl<J: Judge> EvaluationService<J> {
    pub fn new(judge: J, judge_timeout: Duration) -> Self {
        Self {
            judge,
            judge_timeout,
        }
    }

    pub fn judge(&self) -> &J {
        &self.judge
    }

    pub fn judge_timeout(&self) -> Duration {
        self.judge_timeout
    }

    /// Scores `submission` under every rubric.
    pub async fn evaluate(&self, submission: &Submission) -> Result<Scorecard, JudgeError> {
        let started = Instant::now();

        let (completeness, clarity, technical_accuracy) = tokio::try_join!(
            self.score_rubric(&COMPLETENESS, submission),
            self.score_rubric(&CLARITY, submission),
            self.score_rubric(&TECHNICAL_ACCURACY, submission),
        )
        .inspect_err(|e| warn!(rubric = %e.rubric(), error = %e, "Evaluation failed"))?;

        let scorecard = Scorecard::from_verdicts([completeness, clarity, technical_accuracy])?;

        info!(
            completeness = scorecard.completeness,
            clarity = scorecard.clarity,
            technical_accuracy = scorecard.technical_accuracy,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Evaluation complete"
        );

        Ok(scorecard)
    }

    /// One bounded judge call. A verdict for a different rubric than requested is
    /// treated as malformed output.
    async fn score_rubric(
        &self,
        rubric: &RubricDefinition,
        submission: &Submission,
    ) -> Result<Verdict, JudgeError> {
        let verdict = tokio::time::timeout(self.judge_timeout, self.judge.score(rubric, submission))
            .await
            .map_err(|_| JudgeError::Timeout {
                rubric: rubric.rubric,
                timeout: self.judge_timeout,
            })??;

        if verdict.rubric != rubric.rubric {
            return Err(JudgeError::MalformedOutput {
                rubric: rubric.rubric,
                reason: format!("verdict was issued for {}", verdict.rubric),
            });
        }

        debug!(rubric = %rubric.rubric, score = verdict.score, "Rubric scored");
        Ok(verdict)
    }
}
