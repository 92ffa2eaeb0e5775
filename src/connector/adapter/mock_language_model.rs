use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::LanguageModel;
use crate::domain::{DomainError, Prompt, QueryContext};

pub const MOCK_BACKEND_TYPE: &str = "mock";

enum MockBehavior {
    /// Reply with the question line of the prompt.
    Echo,
    Reply(String),
    Fail(String),
}

/// Offline [`LanguageModel`] for tests and for running the UI without a model server.
///
/// Records every rendered prompt it receives.
pub struct MockLanguageModel {
    behavior: MockBehavior,
    prompts: Mutex<Vec<String>>,
}

impl MockLanguageModel {
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Echo)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(reply.into()))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(reason.into()))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

impl Default for MockLanguageModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    fn backend_type(&self) -> &str {
        MOCK_BACKEND_TYPE
    }

    async fn generate(
        &self,
        prompt: &dyn Prompt,
        _context: Option<&QueryContext>,
    ) -> Result<String, DomainError> {
        let rendered = prompt.render();
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(rendered.clone());
        }

        match &self.behavior {
            MockBehavior::Echo => {
                let question = rendered
                    .lines()
                    .rev()
                    .find(|l| !l.trim().is_empty())
                    .unwrap_or_default()
                    .trim_start_matches("Question:")
                    .trim();
                Ok(format!("[mock] {question}"))
            }
            MockBehavior::Reply(reply) => Ok(reply.clone()),
            MockBehavior::Fail(reason) => Err(DomainError::generation(format!(
                "Mock call failed: {reason}"
            ))),
        }
    }
}
