//! Prompt construction for reference-labelled rubric scoring.

use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::rubric::{RubricDefinition, Submission};

pub const SYSTEM_PROMPT: &str =
    "You are an impartial grader. You compare an answer against a reference answer using a single scoring rubric.";

/// Builds the user message for one rubric.
///
/// The question is the context, the reference answer is the ground truth and the
/// user answer is the prediction under evaluation. The reply format (`Rating: [[N]]`)
/// is what [`parse_verdict`](super::verdict::parse_verdict) expects.
pub fn build_judge_prompt(rubric: &RubricDefinition, submission: &Submission) -> String {
    format!(
        r#"# Task
Grade the answer below against the reference answer. Judge it only on the criterion given.

# Criterion
{criterion}

# Question
{question}

# Reference Answer
{reference}

# Answer To Grade
{prediction}

# Required Response Format
Start with a short explanation. Then give a score from {min} to {max} on its own line, exactly in this form:
Rating: [[<score>]]"#,
        criterion = rubric.criterion_text(),
        question = submission.question,
        reference = submission.reference_answer,
        prediction = submission.user_answer,
        min = MIN_SCORE,
        max = MAX_SCORE,
    )
}
