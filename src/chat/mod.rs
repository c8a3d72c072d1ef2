//! Response generation for the chat endpoint
//!
//! `ResponsePolicy` maps user text to a response string. In online mode it
//! makes exactly one bounded call to the chat-completion provider; every
//! provider-side failure degrades to the offline keyword responder, which
//! by construction cannot fail. The caller therefore always receives a
//! non-empty string, never an error.

pub mod offline;
pub mod provider;

pub use offline::{EMPTY_INPUT_GREETING, GENERIC_RESPONSES, OfflineResponder};
pub use provider::{ChatCompletions, ChatProvider, ProviderError};

use std::sync::Arc;

use crate::{Config, Result};

/// Operating mode for response generation
///
/// Derived once from configuration at startup; recomputed per process, not
/// per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseMode {
    /// Attempt the external chat-completion provider
    Online,
    /// Always respond locally, no network access
    Offline,
}

impl ResponseMode {
    /// Derive the mode from configuration
    ///
    /// Offline when explicitly requested or when no credential is present.
    /// A present credential with the offline flag set still forces offline
    /// mode.
    #[must_use]
    pub fn derive(offline_flag: bool, api_key: Option<&str>) -> Self {
        if offline_flag || api_key.is_none_or(str::is_empty) {
            Self::Offline
        } else {
            Self::Online
        }
    }
}

/// Maps user text to a response string
///
/// Guarantees a non-empty result under all conditions: provider failures
/// are logged and replaced by the offline responder's output rather than
/// surfaced to the caller. Holds only immutable configuration, so handlers
/// share it without locking.
pub struct ResponsePolicy {
    mode: ResponseMode,
    provider: Option<Arc<dyn ChatProvider>>,
    offline: OfflineResponder,
}

impl ResponsePolicy {
    /// Build a policy from configuration
    ///
    /// # Errors
    ///
    /// Returns error if online mode is selected but the provider client
    /// cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mode = ResponseMode::derive(config.offline, config.openai_api_key.as_deref());

        match (mode, &config.openai_api_key) {
            (ResponseMode::Online, Some(key)) => {
                let provider = ChatCompletions::new(
                    key.clone(),
                    config.chat.model.clone(),
                    config.chat.system_prompt.clone(),
                    config.chat.provider_timeout,
                )?;
                Ok(Self::online(Arc::new(provider)))
            }
            _ => Ok(Self::offline()),
        }
    }

    /// Create a policy that always responds locally
    #[must_use]
    pub fn offline() -> Self {
        Self {
            mode: ResponseMode::Offline,
            provider: None,
            offline: OfflineResponder,
        }
    }

    /// Create a policy that attempts the given provider first
    #[must_use]
    pub fn online(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            mode: ResponseMode::Online,
            provider: Some(provider),
            offline: OfflineResponder,
        }
    }

    /// The mode this policy operates in
    #[must_use]
    pub const fn mode(&self) -> ResponseMode {
        self.mode
    }

    /// Produce a response for the given user text
    ///
    /// Online mode makes a single provider attempt (no retries, to bound
    /// request latency) and falls back to the offline responder on any
    /// classified failure.
    pub async fn respond(&self, text: &str) -> String {
        match (self.mode, self.provider.as_ref()) {
            (ResponseMode::Online, Some(provider)) => match provider.complete(text).await {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!(error = %e, "chat provider failed, using offline response");
                    self.offline.respond(text)
                }
            },
            _ => self.offline.respond(text),
        }
    }
}
