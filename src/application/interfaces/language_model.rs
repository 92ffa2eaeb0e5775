use async_trait::async_trait;

use crate::domain::{DomainError, Prompt, QueryContext};

/// A pluggable text-generation backend.
///
/// Each backend is its own type with its own constructor; callers only see
/// this interface and pick a backend at configuration time.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Symbolic tag identifying the backend (e.g. `"ollama"`).
    fn backend_type(&self) -> &str;

    /// Send the rendered prompt to the model and return the generated text.
    ///
    /// `context` carries per-query session data; a backend may ignore it.
    async fn generate(
        &self,
        prompt: &dyn Prompt,
        context: Option<&QueryContext>,
    ) -> Result<String, DomainError>;
}
