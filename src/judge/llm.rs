use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use genai::resolver::{AuthData, AuthResolver};
use genai::{Client, ModelIden};
use std::time::Instant;
use tracing::{debug, error};

use crate::config::{Config, ConfigError};
use crate::constants::JUDGE_TEMPERATURE;
use crate::rubric::{RubricDefinition, Submission};

use super::error::JudgeError;
use super::prompt::{SYSTEM_PROMPT, build_judge_prompt};
use super::verdict::{Verdict, parse_verdict};
use super::{Judge, JudgeMode};

/// Live judge backed by a chat model reached through genai.
///
/// One instance serves every rubric; the rubric is a per-call argument.
pub struct LlmJudge {
    client: Client,
    model: String,
    options: ChatOptions,
}

impl std::fmt::Debug for LlmJudge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmJudge")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl LlmJudge {
    /// Creates a judge for `model` that authenticates every call with `api_key`.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let auth_resolver = AuthResolver::from_resolver_fn(
            move |_model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(api_key.clone())))
            },
        );

        let client = Client::builder().with_auth_resolver(auth_resolver).build();

        Self {
            client,
            model: model.into(),
            options: ChatOptions::default().with_temperature(JUDGE_TEMPERATURE),
        }
    }

    /// Builds the judge from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let api_key = config
            .judge_api_key
            .clone()
            .ok_or(ConfigError::MissingEnvVar {
                name: "EVALUATOR_JUDGE_API_KEY",
            })?;

        Ok(Self::new(config.judge_model.clone(), api_key))
    }

    fn chat_request(rubric: &RubricDefinition, submission: &Submission) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_judge_prompt(rubric, submission)),
        ])
    }
}

impl Judge for LlmJudge {
    async fn score(
        &self,
        rubric: &RubricDefinition,
        submission: &Submission,
    ) -> Result<Verdict, JudgeError> {
        let started = Instant::now();
        let chat_req = Self::chat_request(rubric, submission);

        let response = self
            .client
            .exec_chat(&self.model, chat_req, Some(&self.options))
            .await
            .map_err(|e| {
                error!(rubric = %rubric.rubric, model = %self.model, "Judge request failed: {}", e);
                JudgeError::Unreachable {
                    rubric: rubric.rubric,
                    message: "upstream judge request failed".to_string(),
                }
            })?;

        let reply = response.first_text().unwrap_or_default().to_string();

        debug!(
            rubric = %rubric.rubric,
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            reply_len = reply.len(),
            "Judge replied"
        );

        parse_verdict(rubric.rubric, &reply)
    }

    fn mode(&self) -> JudgeMode {
        JudgeMode::Live
    }

    fn model(&self) -> &str {
        &self.model
    }
}
