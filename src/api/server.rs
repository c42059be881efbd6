//! Tutor HTTP server with axum router and graceful shutdown.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::error::ServerError;
use super::handlers::{handle_panic, post_tutor, AppState};
use crate::config::ServerConfig;
use crate::tutor::TutorService;

/// HTTP server for the tutor API, generated audio, and the static site.
pub struct TutorServer {
    /// Server configuration.
    config: ServerConfig,
    /// Application state shared across handlers.
    state: AppState,
    /// Cancellation token for graceful shutdown.
    cancel: CancellationToken,
}

impl TutorServer {
    /// Create a new server with default configuration.
    #[must_use]
    pub fn new(tutor: Arc<TutorService>) -> Self {
        Self {
            config: ServerConfig::default(),
            state: AppState::new(tutor),
            cancel: CancellationToken::new(),
        }
    }

    /// Set the server configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an externally owned cancellation token (builder pattern).
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that stops the server when cancelled.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Get the configured address as a string.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router with all routes and middleware.
    pub fn build_router(&self) -> Router {
        let narrator = self.state.tutor.narrator();
        // Directory requests, including `/`, resolve to their index.html.
        let site = ServeDir::new(&self.config.public_dir);

        let mut router = Router::new().route("/api/tutor", post(post_tutor));

        // An empty prefix means audio lives inside the static site itself.
        if !narrator.url_prefix().is_empty() {
            router = router.nest_service(
                narrator.url_prefix(),
                ServeDir::new(narrator.audio_dir()),
            );
        }

        let router = router
            .fallback_service(site)
            .with_state(self.state.clone())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http());

        if self.config.cors_permissive {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Run the server, binding to the configured address.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or serve.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::BindError {
                address: addr.clone(),
                source,
            })?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    ///
    /// The server runs until the cancellation token is triggered, at which
    /// point it shuts down gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error if serving fails.
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        let cancel = self.cancel.clone();
        let app = self.build_router();

        tracing::info!(address = ?listener.local_addr().ok(), "Starting tutor server");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
                tracing::info!("Tutor server shutting down gracefully");
            })
            .await?;
        Ok(())
    }
}
