//! Chat-completion provider client
//!
//! One outbound call per request against the `OpenAI` chat-completions
//! endpoint. Failures are classified into a small typed taxonomy consumed
//! by the response policy's fallback branch; nothing here ever reaches the
//! HTTP caller as an error.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Classified failure from the chat-completion provider
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The bounded request deadline elapsed
    #[error("provider timed out")]
    Timeout,

    /// Connection or protocol-level failure
    #[error("provider transport error: {0}")]
    Transport(String),

    /// Non-2xx status, or a payload missing `choices[0].message.content`
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// A chat-completion backend returning one assistant message per request
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Request a completion for the given user text
    async fn complete(&self, text: &str) -> std::result::Result<String, ProviderError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<AssistantMessage>,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Chat-completion client for the `OpenAI` API
pub struct ChatCompletions {
    client: reqwest::Client,
    api_key: String,
    model: String,
    system_prompt: String,
}

impl ChatCompletions {
    /// Create a new chat-completion client
    ///
    /// # Errors
    ///
    /// Returns error if the API key is missing or the HTTP client cannot
    /// be built.
    pub fn new(
        api_key: String,
        model: String,
        system_prompt: String,
        timeout: Duration,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::Config(
                "OpenAI API key required for chat completions".to_string(),
            ));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            model,
            system_prompt,
        })
    }
}

#[async_trait]
impl ChatProvider for ChatCompletions {
    async fn complete(&self, text: &str) -> std::result::Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(ProviderError::Malformed(format!("status {status}: {body}")));
        }

        extract_message(&body)
    }
}

fn classify(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(e.to_string())
    }
}

/// Pull `choices[0].message.content` out of a provider payload
fn extract_message(body: &str) -> std::result::Result<String, ProviderError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Malformed(format!("invalid JSON: {e}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| ProviderError::Malformed("missing choices[0].message.content".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"점심 드셨나요?"}}]}"#;
        assert_eq!(extract_message(body).unwrap(), "점심 드셨나요?");
    }

    #[test]
    fn empty_choices_is_malformed() {
        let err = extract_message(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn missing_content_is_malformed() {
        let body = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        assert!(matches!(
            extract_message(body),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn empty_content_is_malformed() {
        let body = r#"{"choices":[{"message":{"content":""}}]}"#;
        assert!(matches!(
            extract_message(body),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            extract_message("not json"),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = ChatCompletions::new(
            String::new(),
            "gpt-4o-mini".to_string(),
            "You are a helpful assistant.".to_string(),
            Duration::from_secs(30),
        );
        assert!(result.is_err());
    }
}
