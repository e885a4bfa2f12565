use std::sync::Arc;
use std::time::Duration;

use crate::evaluation::EvaluationService;
use crate::judge::Judge;

/// Shared handler state. The judge is constructed once at startup and injected here.
pub struct HandlerState<J: Judge + 'static> {
    pub evaluator: Arc<EvaluationService<J>>,
}

impl<J: Judge + 'static> Clone for HandlerState<J> {
    fn clone(&self) -> Self {
        Self {
            evaluator: Arc::clone(&self.evaluator),
        }
    }
}

impl<J: Judge + 'static> HandlerState<J> {
    pub fn new(judge: J, judge_timeout: Duration) -> Self {
        Self {
            evaluator: Arc::new(EvaluationService::new(judge, judge_timeout)),
        }
    }

    pub fn from_service(evaluator: Arc<EvaluationService<J>>) -> Self {
        Self { evaluator }
    }
}
