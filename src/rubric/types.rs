use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// A named dimension of answer quality.
pub enum Rubric {
    /// How much of the expected content is covered.
    Completeness,
    /// How easy the answer is to follow.
    Clarity,
    /// Correctness against the reference.
    TechnicalAccuracy,
}

impl Rubric {
    /// Returns the wire name (also the response field name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Rubric::Completeness => "completeness",
            Rubric::Clarity => "clarity",
            Rubric::TechnicalAccuracy => "technical_accuracy",
        }
    }
}

impl std::fmt::Display for Rubric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rubric paired with its fixed scoring guide (levels 1/3/5/7/10).
#[derive(Debug, PartialEq, Eq)]
pub struct RubricDefinition {
    /// Which dimension this definition scores.
    pub rubric: Rubric,
    /// Textual description of each score level.
    pub guide: &'static str,
}

impl RubricDefinition {
    /// Renders the criterion as `"name: guide"` for prompt embedding.
    pub fn criterion_text(&self) -> String {
        format!("{}: {}", self.rubric.as_str(), self.guide)
    }
}

/// The validated (question, candidate answer, reference answer) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Context for the judge.
    pub question: String,
    /// The prediction under evaluation.
    pub user_answer: String,
    /// Ground truth the prediction is compared against.
    pub reference_answer: String,
}

impl Submission {
    pub fn new(
        question: impl Into<String>,
        user_answer: impl Into<String>,
        reference_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            user_answer: user_answer.into(),
            reference_answer: reference_answer.into(),
        }
    }
}
