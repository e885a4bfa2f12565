//! Judge reply parsing.
//!
//! A judge reply is free text that ends with a rating in double brackets,
//! e.g. `"... explanation ...\nRating: [[7]]"`. The first bracketed value is
//! the score; everything before it is the reasoning.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::is_score_in_range;
use crate::rubric::Rubric;

use super::error::JudgeError;

static RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Rating:\s*)?\[\[\s*([^\[\]]*?)\s*\]\]").expect("Invalid rating regex pattern")
});

/// One judge's structured reply for one rubric.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// The rubric this verdict scores.
    pub rubric: Rubric,
    /// Score inside `[MIN_SCORE, MAX_SCORE]`.
    pub score: f64,
    /// Explanation text preceding the rating.
    pub reasoning: String,
}

/// Extracts a [`Verdict`] from raw judge output.
pub fn parse_verdict(rubric: Rubric, reply: &str) -> Result<Verdict, JudgeError> {
    if reply.trim().is_empty() {
        return Err(JudgeError::MalformedOutput {
            rubric,
            reason: "empty reply".to_string(),
        });
    }

    let captures = RATING_RE
        .captures(reply)
        .ok_or_else(|| JudgeError::MalformedOutput {
            rubric,
            reason: "no [[rating]] found in reply".to_string(),
        })?;

    let whole = captures.get(0).map(|m| m.start()).unwrap_or(0);
    let raw = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

    let score: f64 = raw.parse().map_err(|_| JudgeError::InvalidScore {
        rubric,
        raw: raw.to_string(),
    })?;

    if !is_score_in_range(score) {
        return Err(JudgeError::ScoreOutOfRange { rubric, score });
    }

    Ok(Verdict {
        rubric,
        score,
        reasoning: reply[..whole].trim().to_string(),
    })
}
