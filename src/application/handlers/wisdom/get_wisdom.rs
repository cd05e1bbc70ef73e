//! Generate guidance for a question, or signal the client to use fallbacks.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::wisdom::{build_prompt, Language, ResponseCategory};
use crate::ports::{GenerationError, WisdomGenerator};

#[derive(Debug, Clone)]
pub struct GetWisdomCommand {
    pub question: String,
    pub category: ResponseCategory,
    pub language: Language,
}

/// Outcome of a generation attempt that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WisdomOutcome {
    Generated { guidance: String },
    /// The backend is unconfigured; the caller should serve its own
    /// fallback content.
    UseFallback,
}

pub struct GetWisdomHandler {
    generator: Arc<dyn WisdomGenerator>,
}

impl GetWisdomHandler {
    pub fn new(generator: Arc<dyn WisdomGenerator>) -> Self {
        Self { generator }
    }

    /// An unconfigured backend is a success with `UseFallback`; only real
    /// generation failures propagate as errors.
    pub async fn handle(&self, command: GetWisdomCommand) -> Result<WisdomOutcome, GenerationError> {
        let prompt = build_prompt(&command.question, command.category, command.language);

        match self.generator.generate(&prompt).await {
            Ok(guidance) => {
                info!(category = %command.category, "generated guidance");
                Ok(WisdomOutcome::Generated { guidance })
            }
            Err(GenerationError::NotConfigured) => {
                info!(category = %command.category, "generation backend unconfigured, signalling fallback");
                Ok(WisdomOutcome::UseFallback)
            }
            Err(err) => {
                warn!(category = %command.category, "generation failed: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubGenerator(Result<String, GenerationError>);

    #[async_trait]
    impl WisdomGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.0.clone()
        }
    }

    fn command(question: &str) -> GetWisdomCommand {
        GetWisdomCommand {
            question: question.to_string(),
            category: ResponseCategory::Anxiety,
            language: Language::English,
        }
    }

    #[tokio::test]
    async fn generated_text_is_returned() {
        let handler = GetWisdomHandler::new(Arc::new(StubGenerator(Ok("Breathe.".to_string()))));

        let outcome = handler.handle(command("I am anxious about exams")).await.unwrap();

        assert_eq!(
            outcome,
            WisdomOutcome::Generated {
                guidance: "Breathe.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unconfigured_backend_is_a_fallback_success() {
        let handler =
            GetWisdomHandler::new(Arc::new(StubGenerator(Err(GenerationError::NotConfigured))));

        let outcome = handler.handle(command("my job is stressful")).await.unwrap();

        assert_eq!(outcome, WisdomOutcome::UseFallback);
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let handler = GetWisdomHandler::new(Arc::new(StubGenerator(Err(
            GenerationError::provider("upstream 503"),
        ))));

        let err = handler.handle(command("help me")).await.unwrap_err();

        assert!(err.is_retryable());
    }
}
