//! Geumbok Gateway - chat and voice gateway for the Geumbok assistant
//!
//! This library provides the core functionality for the Geumbok gateway:
//! - Response policy (online provider vs. offline keyword responder)
//! - Chat-completion and speech-synthesis provider clients
//! - HTTP API consumed by the Geumbok frontend
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  Geumbok Frontend                   │
//! └────────────────────┬────────────────────────────────┘
//!                      │ HTTP
//! ┌────────────────────▼────────────────────────────────┐
//! │                 Geumbok Gateway                     │
//! │   ResponsePolicy  │  OfflineResponder  │  TTS       │
//! └────────────────────┬────────────────────────────────┘
//!                      │ (online mode only)
//! ┌────────────────────▼────────────────────────────────┐
//! │              OpenAI (chat, speech)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Provider failures never reach the frontend: the chat endpoint degrades
//! to the offline responder, so it always answers with a text payload.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod voice;

pub use chat::{ChatProvider, OfflineResponder, ProviderError, ResponseMode, ResponsePolicy};
pub use config::Config;
pub use error::{Error, Result};
pub use voice::TextToSpeech;
