//! Deterministic judge for tests and offline development.
//!
//! Scores are derived from term overlap between the answer and the reference,
//! so identical submissions always get identical scores. The reply is rendered
//! in the live judge's format and parsed through the same code path.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::rubric::{Rubric, RubricDefinition, Submission};

use super::error::JudgeError;
use super::verdict::{Verdict, parse_verdict};
use super::{Judge, JudgeMode};

pub const MOCK_MODEL_NAME: &str = "mock-judge";

/// How the mock judge answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockBehavior {
    /// Reply with a well-formed rating.
    #[default]
    Score,
    /// Fail as if the provider could not be reached.
    Unreachable,
    /// Reply without a parseable rating.
    Malformed,
}

#[derive(Debug, Clone, Default)]
pub struct MockJudge {
    behavior: MockBehavior,
    latency: Option<Duration>,
    fixed_scores: HashMap<Rubric, f64>,
    failing_rubric: Option<Rubric>,
    calls: Arc<AtomicUsize>,
}

impl MockJudge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(mut self, behavior: MockBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Sleeps before replying (used to exercise judge timeouts).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Pins the score reported for `rubric`. The value is rendered into the reply
    /// verbatim, so out-of-range values fail parsing like a live judge would.
    pub fn with_fixed_score(mut self, rubric: Rubric, score: f64) -> Self {
        self.fixed_scores.insert(rubric, score);
        self
    }

    /// Applies the configured behavior to `rubric` only; other rubrics score normally.
    pub fn failing_only(mut self, rubric: Rubric) -> Self {
        self.failing_rubric = Some(rubric);
        self
    }

    /// Number of `score` calls issued so far (shared between clones).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn behavior_for(&self, rubric: Rubric) -> MockBehavior {
        match self.failing_rubric {
            Some(target) if target != rubric => MockBehavior::Score,
            _ => self.behavior,
        }
    }

    fn render_reply(&self, rubric: Rubric, submission: &Submission) -> String {
        let overlap = term_overlap(&submission.user_answer, &submission.reference_answer);
        let score = self
            .fixed_scores
            .get(&rubric)
            .copied()
            .unwrap_or_else(|| overlap_to_score(overlap));

        format!(
            "{:.0}% of the answer's terms appear in the reference, judged for {}.\n\nRating: [[{}]]",
            overlap * 100.0,
            rubric,
            score
        )
    }
}

impl Judge for MockJudge {
    async fn score(
        &self,
        rubric: &RubricDefinition,
        submission: &Submission,
    ) -> Result<Verdict, JudgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.behavior_for(rubric.rubric) {
            MockBehavior::Score => {
                parse_verdict(rubric.rubric, &self.render_reply(rubric.rubric, submission))
            }
            MockBehavior::Unreachable => Err(JudgeError::Unreachable {
                rubric: rubric.rubric,
                message: "mock judge configured as unreachable".to_string(),
            }),
            MockBehavior::Malformed => parse_verdict(
                rubric.rubric,
                "I am unable to provide a rating for this answer.",
            ),
        }
    }

    fn mode(&self) -> JudgeMode {
        JudgeMode::Mock
    }

    fn model(&self) -> &str {
        MOCK_MODEL_NAME
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Fraction of answer terms that also occur in the reference, in `[0, 1]`.
pub(crate) fn term_overlap(answer: &str, reference: &str) -> f64 {
    let answer_terms = tokenize(answer);
    if answer_terms.is_empty() {
        return 0.0;
    }

    let reference_terms = tokenize(reference);
    let shared = answer_terms.intersection(&reference_terms).count();
    shared as f64 / answer_terms.len() as f64
}

pub(crate) fn overlap_to_score(overlap: f64) -> f64 {
    (MIN_SCORE + (MAX_SCORE - MIN_SCORE) * overlap.clamp(0.0, 1.0)).round()
}
