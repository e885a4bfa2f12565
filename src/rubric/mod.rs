//! Rubric definitions and the submission they are applied to.
//!
//! The three rubrics are process-wide `static` values. A judge receives a
//! [`RubricDefinition`] per call; nothing here is mutated after startup.

pub mod types;


pub use types::{Rubric, RubricDefinition, Submission};

/// Completeness: how much of the expected content the answer covers.
pub static COMPLETENESS: RubricDefinition = RubricDefinition {
    rubric: Rubric::Completeness,
    guide: "\
Score 1: The answer is incomplete, missing critical information.
Score 3: The answer includes some key points but lacks significant details.
Score 5: The answer covers most points but misses minor details.
Score 7: The answer is complete but could include additional optional details.
Score 10: The answer is completely thorough and includes all relevant details.",
};

/// Clarity: how easy the answer is to follow.
pub static CLARITY: RubricDefinition = RubricDefinition {
    rubric: Rubric::Clarity,
    guide: "\
Score 1: The answer is unclear and difficult to understand.
Score 3: The answer has partial clarity but is confusing in parts.
Score 5: The answer is moderately clear but has room for improvement.
Score 7: The answer is mostly clear and easy to follow.
Score 10: The answer is completely clear and unambiguous.",
};

/// Technical accuracy: correctness against the reference answer.
pub static TECHNICAL_ACCURACY: RubricDefinition = RubricDefinition {
    rubric: Rubric::TechnicalAccuracy,
    guide: "\
Score 1: The answer contains significant technical inaccuracies.
Score 3: The answer has minor technical inaccuracies or missing details.
Score 5: The answer is mostly accurate but could use refinement.
Score 7: The answer is accurate with minor errors or omissions.
Score 10: The answer is technically perfect and aligns completely with the reference.",
};

/// All rubrics, in response-field order.
pub static ALL_RUBRICS: [&RubricDefinition; 3] = [&COMPLETENESS, &CLARITY, &TECHNICAL_ACCURACY];

/// Looks up the static definition for `rubric`.
pub fn definition(rubric: Rubric) -> &'static RubricDefinition {
    match rubric {
        Rubric::Completeness => &COMPLETENESS,
        Rubric::Clarity => &CLARITY,
        Rubric::TechnicalAccuracy => &TECHNICAL_ACCURACY,
    }
}
