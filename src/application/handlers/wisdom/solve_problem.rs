//! Classify a problem and answer it, falling back to static guidance.
//!
//! Unlike [`super::GetWisdomHandler`], this flow never fails: any
//! generation error is absorbed into the static fallback for the
//! problem's category.

use std::sync::Arc;

use tracing::warn;

use crate::domain::wisdom::{build_prompt, fallback_response, Language, ResponseCategory};
use crate::ports::WisdomGenerator;

#[derive(Debug, Clone)]
pub struct SolveProblemCommand {
    pub problem: String,
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct SolveProblemResult {
    pub category: ResponseCategory,
    pub guidance: String,
    pub used_fallback: bool,
}

pub struct SolveProblemHandler {
    generator: Arc<dyn WisdomGenerator>,
}

impl SolveProblemHandler {
    pub fn new(generator: Arc<dyn WisdomGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: SolveProblemCommand) -> SolveProblemResult {
        let category = ResponseCategory::classify(&command.problem);
        let prompt = build_prompt(&command.problem, category, command.language);

        match self.generator.generate(&prompt).await {
            Ok(guidance) => SolveProblemResult {
                category,
                guidance,
                used_fallback: false,
            },
            Err(err) => {
                warn!(%category, "generation unavailable, serving fallback: {err}");
                SolveProblemResult {
                    category,
                    guidance: fallback_response(category, command.language).to_string(),
                    used_fallback: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GenerationError;
    use async_trait::async_trait;

    struct StubGenerator(Result<String, GenerationError>);

    #[async_trait]
    impl WisdomGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn generated_guidance_is_preferred() {
        let handler =
            SolveProblemHandler::new(Arc::new(StubGenerator(Ok("Act without attachment.".into()))));

        let result = handler
            .handle(SolveProblemCommand {
                problem: "I fear losing my job".to_string(),
                language: Language::English,
            })
            .await;

        assert!(!result.used_fallback);
        assert_eq!(result.guidance, "Act without attachment.");
        assert_eq!(result.category, ResponseCategory::Anxiety);
    }

    #[tokio::test]
    async fn any_generation_error_falls_back_to_static_guidance() {
        for err in [
            GenerationError::NotConfigured,
            GenerationError::Timeout,
            GenerationError::provider("boom"),
        ] {
            let handler = SolveProblemHandler::new(Arc::new(StubGenerator(Err(err))));

            let result = handler
                .handle(SolveProblemCommand {
                    problem: "my marriage is struggling".to_string(),
                    language: Language::Hindi,
                })
                .await;

            assert!(result.used_fallback);
            assert_eq!(result.category, ResponseCategory::Relationships);
            assert_eq!(
                result.guidance,
                fallback_response(ResponseCategory::Relationships, Language::Hindi)
            );
        }
    }
}
