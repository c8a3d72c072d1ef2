//! Response policy integration tests
//!
//! Drives the policy with scripted providers to check the fallback
//! behavior without any network access.

use std::sync::Arc;

use async_trait::async_trait;
use geumbok_gateway::chat::{ChatProvider, OfflineResponder, ProviderError, ResponsePolicy};

/// Provider that always answers with a fixed message
struct FixedProvider(&'static str);

#[async_trait]
impl ChatProvider for FixedProvider {
    async fn complete(&self, _text: &str) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }
}

/// How a scripted provider should fail
enum Failure {
    Timeout,
    Transport,
    Status,
    MissingContent,
}

/// Provider that always fails with the scripted error
struct FailingProvider(Failure);

#[async_trait]
impl ChatProvider for FailingProvider {
    async fn complete(&self, _text: &str) -> Result<String, ProviderError> {
        Err(match self.0 {
            Failure::Timeout => ProviderError::Timeout,
            Failure::Transport => ProviderError::Transport("connection refused".to_string()),
            Failure::Status => {
                ProviderError::Malformed("status 500 Internal Server Error".to_string())
            }
            Failure::MissingContent => {
                ProviderError::Malformed("missing choices[0].message.content".to_string())
            }
        })
    }
}

#[tokio::test]
async fn well_formed_payload_is_returned_verbatim() {
    let policy = ResponsePolicy::online(Arc::new(FixedProvider("오늘 날씨가 좋네요!")));
    assert_eq!(policy.respond("인사해줘").await, "오늘 날씨가 좋네요!");
}

#[tokio::test]
async fn timeout_falls_back_to_offline_response() {
    let policy = ResponsePolicy::online(Arc::new(FailingProvider(Failure::Timeout)));
    // Keyword input makes the offline answer deterministic.
    let expected = OfflineResponder.respond("안녕하세요");
    assert_eq!(policy.respond("안녕하세요").await, expected);
}

#[tokio::test]
async fn transport_error_falls_back_to_offline_response() {
    let policy = ResponsePolicy::online(Arc::new(FailingProvider(Failure::Transport)));
    let expected = OfflineResponder.respond("감사합니다");
    assert_eq!(policy.respond("감사합니다").await, expected);
}

#[tokio::test]
async fn non_2xx_status_falls_back_to_offline_response() {
    let policy = ResponsePolicy::online(Arc::new(FailingProvider(Failure::Status)));
    let expected = OfflineResponder.respond("도움이 필요해요");
    assert_eq!(policy.respond("도움이 필요해요").await, expected);
}

#[tokio::test]
async fn missing_content_falls_back_to_offline_response() {
    let policy = ResponsePolicy::online(Arc::new(FailingProvider(Failure::MissingContent)));
    let expected = OfflineResponder.respond("너는 누구야?");
    assert_eq!(policy.respond("너는 누구야?").await, expected);
}

#[tokio::test]
async fn respond_never_returns_empty_in_either_mode() {
    let offline = ResponsePolicy::offline();
    let failing = ResponsePolicy::online(Arc::new(FailingProvider(Failure::Timeout)));

    for text in ["", "안녕", "웅얼웅얼", "thanks 감사", "몇 시야"] {
        assert!(!offline.respond(text).await.is_empty());
        assert!(!failing.respond(text).await.is_empty());
    }
}

#[tokio::test]
async fn offline_policy_ignores_provider_semantics() {
    let policy = ResponsePolicy::offline();
    let expected = OfflineResponder.respond("안녕하세요");
    assert_eq!(policy.respond("안녕하세요").await, expected);
}
