//! LLM-as-judge scoring.
//!
//! A [`Judge`] takes one [`RubricDefinition`] and a [`Submission`] and returns a
//! [`Verdict`]. [`LlmJudge`] talks to a chat model through genai; [`MockJudge`]
//! is deterministic and never leaves the process.
//!
//! # Reply Protocol
//!
//! Both judges produce free text ending in `Rating: [[N]]`, parsed by
//! [`parse_verdict`]. A reply with no rating, a non-numeric rating, or a rating
//! outside `[MIN_SCORE, MAX_SCORE]` is a [`JudgeError`]; scores are never clamped.

pub mod error;
pub mod llm;
pub mod mock;
pub mod prompt;
pub mod verdict;


pub use error::JudgeError;
pub use llm::LlmJudge;
pub use mock::{MOCK_MODEL_NAME, MockBehavior, MockJudge};
pub use prompt::build_judge_prompt;
pub use verdict::{Verdict, parse_verdict};

use crate::rubric::{RubricDefinition, Submission};

/// Whether a judge calls a real model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeMode {
    Live,
    Mock,
}

impl JudgeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgeMode::Live => "live",
            JudgeMode::Mock => "mock",
        }
    }
}

/// Scores a submission against a single rubric.
pub trait Judge: Send + Sync {
    /// Scores `submission` (prediction = user answer, reference = reference answer,
    /// context = question) under `rubric`.
    fn score(
        &self,
        rubric: &RubricDefinition,
        submission: &Submission,
    ) -> impl std::future::Future<Output = Result<Verdict, JudgeError>> + Send;

    /// Reports whether this judge is live or mocked.
    fn mode(&self) -> JudgeMode;

    /// Model identifier used for scoring.
    fn model(&self) -> &str;
}
