//! Rubric evaluation library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Service
//! - [`Config`], [`ConfigError`] - Environment-backed server configuration
//! - [`EvaluationService`], [`Scorecard`] - Concurrent scoring across all rubrics
//! - [`create_router_with_state`], [`HandlerState`] - The HTTP surface
//!
//! ## Judging
//! - [`Judge`] - The scoring seam; implemented by [`LlmJudge`] and [`MockJudge`]
//! - [`Verdict`], [`parse_verdict`] - The `Rating: [[N]]` reply protocol
//! - [`JudgeError`] - Upstream failures (unreachable, timeout, malformed output)
//!
//! ## Rubrics
//! - [`Rubric`], [`RubricDefinition`] and the static [`COMPLETENESS`], [`CLARITY`],
//!   [`TECHNICAL_ACCURACY`] definitions
//! - [`Submission`] - The validated (question, answer, reference) triple

pub mod config;
pub mod constants;
pub mod evaluation;
pub mod gateway;
pub mod judge;
pub mod rubric;

pub use config::{Config, ConfigError};
pub use constants::{EVALUATOR_STATUS_HEADER, MAX_SCORE, MIN_SCORE, WELCOME_MESSAGE};
pub use evaluation::{EvaluationService, Scorecard};
pub use gateway::{
    EvaluationRequest, EvaluationResponse, GatewayError, HandlerState, create_router_with_state,
};
pub use judge::{
    Judge, JudgeError, JudgeMode, LlmJudge, MockBehavior, MockJudge, Verdict, parse_verdict,
};
pub use rubric::{
    ALL_RUBRICS, CLARITY, COMPLETENESS, Rubric, RubricDefinition, Submission, TECHNICAL_ACCURACY,
};
