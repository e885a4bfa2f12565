//! Cross-cutting, shared constants.
//!
//! The score range is the judge protocol's contract: every prompt asks for a
//! rating inside it and every parsed verdict is checked against it.

/// Lowest score a judge may assign.
pub const MIN_SCORE: f64 = 1.0;

/// Highest score a judge may assign.
pub const MAX_SCORE: f64 = 10.0;

/// Default judge model (genai namespaced model identifier).
pub const DEFAULT_JUDGE_MODEL: &str = "groq::llama-3.3-70b-versatile";

/// Default per-call judge timeout in seconds.
pub const DEFAULT_JUDGE_TIMEOUT_SECS: u64 = 30;

/// Sampling temperature for judge calls.
pub const JUDGE_TEMPERATURE: f64 = 0.0;

/// Body of `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Single Feedback Evaluation API...";

/// Response header carrying the outcome of an evaluation request.
pub const EVALUATOR_STATUS_HEADER: &str = "x-evaluator-status";

/// Returns `true` if `score` lies inside `[MIN_SCORE, MAX_SCORE]`.
pub fn is_score_in_range(score: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}
