use std::time::Duration;

use super::*;
use crate::judge::{JudgeMode, MockBehavior, MockJudge};
use crate::rubric::{Rubric, Submission};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

fn arithmetic_submission() -> Submission {
    Submission::new("What is 2+2?", "4", "The answer is 4.")
}

fn verdict(rubric: Rubric, score: f64) -> Verdict {
    Verdict {
        rubric,
        score,
        reasoning: String::new(),
    }
}

/// Judge that answers every call with a verdict for the same, fixed rubric.
struct MislabellingJudge;

impl Judge for MislabellingJudge {
    async fn score(
        &self,
        _rubric: &RubricDefinition,
        _submission: &Submission,
    ) -> Result<Verdict, JudgeError> {
        Ok(verdict(Rubric::Clarity, 5.0))
    }

    fn mode(&self) -> JudgeMode {
        JudgeMode::Mock
    }

    fn model(&self) -> &str {
        "mislabelling"
    }
}

mod scorecard_tests {
    use super::*;

    #[test]
    fn test_from_verdicts_places_scores_by_rubric() {
        let scorecard = Scorecard::from_verdicts([
            verdict(Rubric::TechnicalAccuracy, 9.0),
            verdict(Rubric::Completeness, 3.0),
            verdict(Rubric::Clarity, 6.0),
        ])
        .unwrap();

        assert_eq!(scorecard.completeness, 3.0);
        assert_eq!(scorecard.clarity, 6.0);
        assert_eq!(scorecard.technical_accuracy, 9.0);
        assert_eq!(scorecard.score(Rubric::Clarity), 6.0);
    }

    #[test]
    fn test_from_verdicts_rejects_duplicates() {
        let err = Scorecard::from_verdicts([
            verdict(Rubric::Completeness, 3.0),
            verdict(Rubric::Completeness, 4.0),
            verdict(Rubric::Clarity, 6.0),
        ])
        .unwrap_err();

        match err {
            JudgeError::MalformedOutput { rubric, reason } => {
                assert_eq!(rubric, Rubric::Completeness);
                assert!(reason.contains("duplicate"));
            }
            other => panic!("Expected MalformedOutput, got {other:?}"),
        }
    }
}

mod evaluate_tests {
    use super::*;

    #[tokio::test]
    async fn test_evaluate_returns_three_scores_in_range() {
        let service = EvaluationService::new(MockJudge::new(), TEST_TIMEOUT);

        let scorecard = service.evaluate(&arithmetic_submission()).await.unwrap();

        for rubric in [
            Rubric::Completeness,
            Rubric::Clarity,
            Rubric::TechnicalAccuracy,
        ] {
            let score = scorecard.score(rubric);
            assert!((1.0..=10.0).contains(&score), "{rubric} = {score}");
            assert!(score >= 7.0, "{rubric} = {score}");
        }
        assert_eq!(service.judge().call_count(), 3);
    }

    #[tokio::test]
    async fn test_evaluate_keeps_rubrics_apart() {
        let judge = MockJudge::new()
            .with_fixed_score(Rubric::Completeness, 2.0)
            .with_fixed_score(Rubric::Clarity, 5.0)
            .with_fixed_score(Rubric::TechnicalAccuracy, 9.0);
        let service = EvaluationService::new(judge, TEST_TIMEOUT);

        let scorecard = service.evaluate(&arithmetic_submission()).await.unwrap();

        assert_eq!(
            scorecard,
            Scorecard {
                completeness: 2.0,
                clarity: 5.0,
                technical_accuracy: 9.0,
            }
        );
    }

    #[tokio::test]
    async fn test_evaluate_fails_whole_when_one_rubric_fails() {
        let judge = MockJudge::new()
            .with_behavior(MockBehavior::Unreachable)
            .failing_only(Rubric::TechnicalAccuracy);
        let service = EvaluationService::new(judge, TEST_TIMEOUT);

        let err = service.evaluate(&arithmetic_submission()).await.unwrap_err();

        assert!(matches!(err, JudgeError::Unreachable { .. }));
        assert_eq!(err.rubric(), Rubric::TechnicalAccuracy);
    }

    #[tokio::test]
    async fn test_evaluate_malformed_output_fails() {
        let service = EvaluationService::new(
            MockJudge::new().with_behavior(MockBehavior::Malformed),
            TEST_TIMEOUT,
        );

        let err = service.evaluate(&arithmetic_submission()).await.unwrap_err();
        assert!(matches!(err, JudgeError::MalformedOutput { .. }));
    }

    #[tokio::test]
    async fn test_evaluate_times_out_slow_judge() {
        let judge = MockJudge::new().with_latency(Duration::from_secs(10));
        let service = EvaluationService::new(judge, Duration::from_millis(50));

        let started = std::time::Instant::now();
        let err = service.evaluate(&arithmetic_submission()).await.unwrap_err();

        assert!(err.is_timeout());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_evaluate_runs_rubrics_concurrently() {
        let judge = MockJudge::new().with_latency(Duration::from_millis(300));
        let service = EvaluationService::new(judge, TEST_TIMEOUT);

        let started = std::time::Instant::now();
        service.evaluate(&arithmetic_submission()).await.unwrap();

        assert!(
            started.elapsed() < Duration::from_millis(850),
            "three 300ms calls took {:?}",
            started.elapsed()
        );
    }

    #[tokio::test]
    async fn test_evaluate_rejects_mislabelled_verdicts() {
        let service = EvaluationService::new(MislabellingJudge, TEST_TIMEOUT);

        let err = service.evaluate(&arithmetic_submission()).await.unwrap_err();

        match err {
            JudgeError::MalformedOutput { rubric, reason } => {
                assert_ne!(rubric, Rubric::Clarity);
                assert!(reason.contains("clarity"));
            }
            other => panic!("Expected MalformedOutput, got {other:?}"),
        }
    }

    #[test]
    fn test_service_debug_shows_judge_identity() {
        let service = EvaluationService::new(MockJudge::new(), TEST_TIMEOUT);
        let rendered = format!("{:?}", service);

        assert!(rendered.contains("Mock"));
        assert!(rendered.contains("mock-judge"));
        assert_eq!(service.judge_timeout(), TEST_TIMEOUT);
    }
}
