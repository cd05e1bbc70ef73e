//! Interpret a dream, falling back to static guidance.
//!
//! Same contract as [`super::SolveProblemHandler`]: any generation error is
//! absorbed into the fixed per-language fallback.

use std::sync::Arc;

use tracing::warn;

use crate::domain::wisdom::{build_dream_prompt, dream_fallback, Language};
use crate::ports::WisdomGenerator;

#[derive(Debug, Clone)]
pub struct InterpretDreamCommand {
    pub dream: String,
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct InterpretDreamResult {
    pub interpretation: String,
    pub used_fallback: bool,
}

pub struct InterpretDreamHandler {
    generator: Arc<dyn WisdomGenerator>,
}

impl InterpretDreamHandler {
    pub fn new(generator: Arc<dyn WisdomGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: InterpretDreamCommand) -> InterpretDreamResult {
        let prompt = build_dream_prompt(&command.dream, command.language);

        match self.generator.generate(&prompt).await {
            Ok(interpretation) => InterpretDreamResult {
                interpretation,
                used_fallback: false,
            },
            Err(err) => {
                warn!("generation unavailable, serving dream fallback: {err}");
                InterpretDreamResult {
                    interpretation: dream_fallback(command.language).to_string(),
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
    async fn generated_interpretation_is_preferred() {
        let handler = InterpretDreamHandler::new(Arc::new(StubGenerator(Ok(
            "The river is the mind in motion.".to_string(),
        ))));

        let result = handler
            .handle(InterpretDreamCommand {
                dream: "I was flying over a river".to_string(),
                language: Language::English,
            })
            .await;

        assert!(!result.used_fallback);
        assert_eq!(result.interpretation, "The river is the mind in motion.");
    }

    #[tokio::test]
    async fn any_generation_error_falls_back_to_static_guidance() {
        for err in [
            GenerationError::NotConfigured,
            GenerationError::Timeout,
            GenerationError::provider("boom"),
        ] {
            let handler = InterpretDreamHandler::new(Arc::new(StubGenerator(Err(err))));

            let result = handler
                .handle(InterpretDreamCommand {
                    dream: "I lost my way in a forest".to_string(),
                    language: Language::Hindi,
                })
                .await;

            assert!(result.used_fallback);
            assert_eq!(result.interpretation, dream_fallback(Language::Hindi));
        }
    }
}
