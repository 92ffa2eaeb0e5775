use std::error::Error as StdError;
use std::fmt::Display;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::LanguageModel;
use crate::domain::{DomainError, Prompt, QueryContext};

/// Default target: Ollama running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3";
/// Upper bound on a single generation call, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
pub const OLLAMA_BACKEND_TYPE: &str = "ollama";
const CHAT_PATH: &str = "/api/chat";

/// Ollama `/api/chat` request payload.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// [`LanguageModel`] backed by a local Ollama server's chat endpoint.
///
/// Every call is a single non-streaming `POST {base_url}/api/chat` bounded by
/// the configured timeout. Transport errors, non-2xx statuses and malformed
/// JSON all surface as [`DomainError::Generation`]; no retries are attempted.
///
/// A reply without `message.content` yields an empty string rather than an
/// error. That leniency is logged at `warn` level so a server that changes its
/// response shape does not go unnoticed.
pub struct OllamaClient {
    client: reqwest::Client,
    model: String,
    /// Base URL without trailing slash.
    base_url: String,
    /// Full endpoint URL (base + CHAT_PATH).
    url: String,
    /// Kept for parity with hosted backends; Ollama does not read it.
    api_key: Option<String>,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(
        model: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let base: String = base_url.into();
        let base_url = base.trim_end_matches('/').to_string();
        let url = format!("{base_url}{CHAT_PATH}");
        Self {
            client: build_http_client(DEFAULT_TIMEOUT),
            model: model.into(),
            base_url,
            url,
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_http_client(timeout);
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn describe_transport_error(&self, err: &reqwest::Error) -> String {
        let mut message = if err.is_timeout() {
            format!("request timed out after {}s: {err}", self.timeout.as_secs_f32())
        } else if err.is_connect() {
            format!("could not connect to {}: {err}", self.base_url)
        } else {
            err.to_string()
        };

        // reqwest's Display hides the root cause (refused, DNS, ...).
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        message
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, DEFAULT_BASE_URL, None)
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

fn generation_failure(cause: impl Display) -> DomainError {
    DomainError::generation(format!("Ollama call failed: {cause}"))
}

/// Pull `message.content` out of an `/api/chat` reply.
///
/// An absent `message`, or an absent or null `content`, degrades to an empty
/// string. Any other shape mismatch, `"message": null` included, is a
/// generation failure.
fn extract_content(data: &Value) -> Result<String, DomainError> {
    let Some(body) = data.as_object() else {
        return Err(generation_failure(format!(
            "response body is not a JSON object: {data}"
        )));
    };

    let content = match body.get("message") {
        None => None,
        Some(Value::Null) => return Err(generation_failure("message is null")),
        Some(Value::Object(message)) => match message.get("content") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                return Err(generation_failure(format!(
                    "message.content is not a string: {other}"
                )))
            }
        },
        Some(other) => {
            return Err(generation_failure(format!(
                "message is not an object: {other}"
            )))
        }
    };

    Ok(content.unwrap_or_else(|| {
        warn!("OllamaClient: response has no message.content; returning empty text");
        String::new()
    }))
}

#[async_trait]
impl LanguageModel for OllamaClient {
    fn backend_type(&self) -> &str {
        OLLAMA_BACKEND_TYPE
    }

    async fn generate(
        &self,
        prompt: &dyn Prompt,
        _context: Option<&QueryContext>,
    ) -> Result<String, DomainError> {
        let prompt = prompt.render();
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            stream: false,
        };

        debug!(
            "OllamaClient: POST {} (model {}, {} prompt chars)",
            self.url,
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| generation_failure(self.describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OllamaClient: server returned {status}: {body}");
            return Err(generation_failure(format!("server returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| generation_failure(self.describe_transport_error(&e)))?;

        let data: Value = serde_json::from_str(&body)
            .map_err(|e| generation_failure(format!("invalid JSON in response: {e}")))?;

        extract_content(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_target_local_llama3() {
        let client = OllamaClient::default();
        assert_eq!(client.model(), "llama3");
        assert_eq!(client.endpoint_url(), "http://localhost:11434/api/chat");
        assert_eq!(client.api_key(), None);
        assert_eq!(client.timeout(), Duration::from_secs(120));
        assert_eq!(client.backend_type(), "ollama");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let with_slash = OllamaClient::new("m", "http://host:1234/", None);
        let without_slash = OllamaClient::new("m", "http://host:1234", None);
        assert_eq!(with_slash.endpoint_url(), "http://host:1234/api/chat");
        assert_eq!(with_slash.endpoint_url(), without_slash.endpoint_url());
        assert_eq!(with_slash.base_url(), "http://host:1234");
    }

    #[test]
    fn repeated_trailing_slashes_are_all_removed() {
        let client = OllamaClient::new("m", "http://host:1234///", None);
        assert_eq!(client.endpoint_url(), "http://host:1234/api/chat");
    }

    #[test]
    fn with_timeout_overrides_default() {
        let client = OllamaClient::default().with_timeout(Duration::from_secs(5));
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn request_serializes_to_chat_payload() {
        let request = ChatRequest {
            model: "llama3",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            stream: false,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "llama3",
                "messages": [{"role": "user", "content": "hello"}],
                "stream": false
            })
        );
    }

    #[test]
    fn extract_content_reads_message_content() {
        let data = json!({"model": "llama3", "message": {"role": "assistant", "content": "42"}, "done": true});
        assert_eq!(extract_content(&data).unwrap(), "42");
    }

    #[test]
    fn extract_content_degrades_to_empty_when_fields_missing() {
        assert_eq!(extract_content(&json!({})).unwrap(), "");
        assert_eq!(extract_content(&json!({"message": {"role": "assistant"}})).unwrap(), "");
        assert_eq!(
            extract_content(&json!({"message": {"role": "assistant", "content": null}})).unwrap(),
            ""
        );
    }

    #[test]
    fn extract_content_rejects_unexpected_shapes() {
        for data in [
            json!([1, 2]),
            json!("text"),
            json!({"message": null}),
            json!({"message": "hi"}),
            json!({"message": {"content": 7}}),
        ] {
            let err = extract_content(&data).unwrap_err();
            assert!(err.is_generation_error(), "{data} should fail");
            assert!(err.to_string().contains("Ollama call failed"));
        }
    }
}
