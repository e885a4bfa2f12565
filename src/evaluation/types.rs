use crate::judge::{JudgeError, Verdict};
use crate::rubric::Rubric;

/// The three rubric scores of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorecard {
    pub completeness: f64,
    pub clarity: f64,
    pub technical_accuracy: f64,
}

impl Scorecard {
    /// Places each verdict by its own rubric, independent of input order.
    ///
    /// Every rubric must appear exactly once.
    pub fn from_verdicts(verdicts: [Verdict; 3]) -> Result<Self, JudgeError> {
        let mut completeness = None;
        let mut clarity = None;
        let mut technical_accuracy = None;

        for verdict in verdicts {
            let slot = match verdict.rubric {
                Rubric::Completeness => &mut completeness,
                Rubric::Clarity => &mut clarity,
                Rubric::TechnicalAccuracy => &mut technical_accuracy,
            };

            if slot.replace(verdict.score).is_some() {
                return Err(JudgeError::MalformedOutput {
                    rubric: verdict.rubric,
                    reason: "duplicate verdict for rubric".to_string(),
                });
            }
        }

        let missing = |rubric: Rubric| JudgeError::MalformedOutput {
            rubric,
            reason: "no verdict for rubric".to_string(),
        };

        Ok(Self {
            completeness: completeness.ok_or_else(|| missing(Rubric::Completeness))?,
            clarity: clarity.ok_or_else(|| missing(Rubric::Clarity))?,
            technical_accuracy: technical_accuracy
                .ok_or_else(|| missing(Rubric::TechnicalAccuracy))?,
        })
    }

    /// Returns the score for `rubric`.
    pub fn score(&self, rubric: Rubric) -> f64 {
        match rubric {
            Rubric::Completeness => self.completeness,
            Rubric::Clarity => self.clarity,
            Rubric::TechnicalAccuracy => self.technical_accuracy,
        }
    }
}
