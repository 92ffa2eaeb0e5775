use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::application::LanguageModel;

use super::{MockLanguageModel, OllamaClient, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

/// Connection settings for [`OllamaClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OllamaConfig {
    /// Construct from environment variables with local-first defaults:
    ///
    /// | Variable              | Default                  |
    /// |-----------------------|--------------------------|
    /// | `OLLAMA_BASE_URL`     | `http://localhost:11434` |
    /// | `OLLAMA_MODEL`        | `llama3`                 |
    /// | `OLLAMA_API_KEY`      | unset                    |
    /// | `OLLAMA_TIMEOUT_SECS` | `120`                    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timeout = match lookup("OLLAMA_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Ignoring invalid OLLAMA_TIMEOUT_SECS '{}', using {}s",
                        raw,
                        defaults.timeout.as_secs()
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            model: lookup("OLLAMA_MODEL").unwrap_or(defaults.model),
            base_url: lookup("OLLAMA_BASE_URL").unwrap_or(defaults.base_url),
            api_key: lookup("OLLAMA_API_KEY").filter(|k| !k.is_empty()),
            timeout,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The language model backend chosen at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmBackend {
    Ollama(OllamaConfig),
    Mock,
}

impl LlmBackend {
    pub fn build(&self) -> Arc<dyn LanguageModel> {
        match self {
            LlmBackend::Ollama(config) => Arc::new(
                OllamaClient::new(
                    config.model.clone(),
                    config.base_url.clone(),
                    config.api_key.clone(),
                )
                .with_timeout(config.timeout),
            ),
            LlmBackend::Mock => Arc::new(MockLanguageModel::new()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            LlmBackend::Ollama(config) => {
                format!("ollama model {} at {}", config.model, config.base_url)
            }
            LlmBackend::Mock => "mock model".to_string(),
        }
    }
}
