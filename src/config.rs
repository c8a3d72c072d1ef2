//! Configuration management for the Geumbok gateway

use std::path::PathBuf;
use std::time::Duration;

/// Default chat-completion model
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Default system prompt sent with every chat-completion request
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Outbound provider calls are bounded by this timeout; there are no retries
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Geumbok gateway configuration
///
/// Loaded once at process start and treated as immutable for the process
/// lifetime. The response policy receives this snapshot at construction
/// time rather than reading ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// `OpenAI` API key (for chat completions and TTS)
    pub openai_api_key: Option<String>,

    /// Force offline mode even when a credential is present
    pub offline: bool,

    /// Chat-completion configuration
    pub chat: ChatConfig,

    /// Text-to-speech configuration
    pub tts: TtsConfig,

    /// Path to static files directory (bundled chat page)
    pub static_dir: Option<PathBuf>,
}

/// Chat-completion provider configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Model identifier (e.g. "gpt-4o-mini")
    pub model: String,

    /// System prompt sent with every request
    pub system_prompt: String,

    /// Timeout for the single outbound provider call
    pub provider_timeout: Duration,
}

/// Text-to-speech configuration
#[derive(Debug, Clone)]
pub struct TtsConfig {
    /// TTS model (e.g. "tts-1")
    pub model: String,

    /// TTS voice identifier
    pub voice: String,

    /// TTS speed multiplier (0.25 to 4.0)
    pub speed: f32,
}

impl Config {
    /// Load configuration from the environment
    #[must_use]
    pub fn load() -> Self {
        Self::load_with_options(false)
    }

    /// Load configuration with an explicit offline override
    ///
    /// An empty `OPENAI_API_KEY` is treated the same as an absent one:
    /// both leave the gateway in offline mode.
    #[must_use]
    pub fn load_with_options(force_offline: bool) -> Self {
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let offline = force_offline
            || std::env::var("GEUMBOK_OFFLINE")
                .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

        let chat = ChatConfig {
            model: std::env::var("GEUMBOK_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            system_prompt: std::env::var("GEUMBOK_SYSTEM_PROMPT")
                .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string()),
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        };

        let tts = TtsConfig {
            model: std::env::var("GEUMBOK_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            voice: std::env::var("GEUMBOK_TTS_VOICE").unwrap_or_else(|_| "nova".to_string()),
            speed: std::env::var("GEUMBOK_TTS_SPEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.0),
        };

        let static_dir = std::env::var("GEUMBOK_STATIC_DIR").ok().map(PathBuf::from);

        Self {
            openai_api_key,
            offline,
            chat,
            tts,
            static_dir,
        }
    }
}
