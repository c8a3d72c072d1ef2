//! HTTP API server for the Geumbok gateway

pub mod chat;
pub mod health;
pub mod voice;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::chat::{ResponseMode, ResponsePolicy};
use crate::voice::TextToSpeech;
use crate::{Config, Result};

/// Shared state for API handlers
///
/// Immutable for the process lifetime; handlers read it concurrently
/// without locking.
pub struct ApiState {
    /// Response policy for the chat endpoint
    pub policy: ResponsePolicy,
    /// TTS client, present only when a credential is configured
    pub tts: Option<TextToSpeech>,
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
    static_dir: Option<PathBuf>,
}

impl ApiServer {
    /// Build the API server from configuration
    ///
    /// # Errors
    ///
    /// Returns error if the response policy or TTS client cannot be
    /// constructed.
    pub fn new(config: &Config, port: u16) -> Result<Self> {
        let policy = ResponsePolicy::from_config(config)?;

        let tts = match &config.openai_api_key {
            Some(key) => Some(TextToSpeech::new(
                key.clone(),
                config.tts.model.clone(),
                config.tts.voice.clone(),
                config.tts.speed,
            )?),
            None => None,
        };

        Ok(Self {
            state: Arc::new(ApiState { policy, tts }),
            port,
            static_dir: config.static_dir.clone(),
        })
    }

    /// The response mode the chat endpoint operates in
    #[must_use]
    pub fn mode(&self) -> ResponseMode {
        self.state.policy.mode()
    }

    /// Build the router with all routes
    fn router(&self) -> Router {
        let mut router = Router::new()
            .nest("/api/v1", chat::router(self.state.clone()))
            .nest("/api/v1/tts", voice::router(self.state.clone()))
            .merge(health::router());

        // Serve the bundled chat page if configured
        if let Some(static_dir) = &self.static_dir {
            router = router.fallback_service(ServeDir::new(static_dir));
            tracing::info!(path = %static_dir.display(), "serving static files");
        }

        // CORS layer for cross-origin requests from the frontend
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        router.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(port = self.port, "API server listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }

    /// Run the API server in a background task
    #[must_use]
    pub fn spawn(self) -> tokio::task::JoinHandle<Result<()>> {
        tokio::spawn(async move { self.run().await })
    }
}
