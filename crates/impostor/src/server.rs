//! `ImpostorServer` builder and server loop.
//!
//! This is the entry point for running the game. It ties together the
//! session (game rules + lock), the word source and the HTTP routes.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use impostor_session::{
    SessionConfig, SharedSession, StaticWordSource, WordSource,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::ImpostorError;

/// Builds the HTTP routes around an existing session.
///
/// Exposed so tests (and embedders) can drive the gateway without
/// binding a socket.
pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/", get(handler::home))
        .route("/join", post(handler::join))
        .route("/player/{token}", get(handler::player))
        .route("/status", get(handler::status))
        .route("/api/status", get(handler::status_json))
        .route("/start", post(handler::start_round))
        .route("/start_round", post(handler::start_round))
        .route("/reset", post(handler::reset))
        .route("/reset_game", post(handler::reset))
        .layer(TraceLayer::new_for_http())
        .with_state(session)
}

/// Builder for configuring and starting an Impostor server.
///
/// # Example
///
/// ```rust,ignore
/// use impostor::prelude::*;
///
/// let server = ImpostorServer::builder()
///     .bind("0.0.0.0:5000")
///     .session_config(SessionConfig::with_master_secret("pw"))
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct ImpostorServerBuilder {
    bind_addr: String,
    session_config: SessionConfig,
    words: Arc<dyn WordSource>,
    session: Option<SharedSession>,
}

impl ImpostorServerBuilder {
    /// Creates a new builder with default settings: `127.0.0.1:5000`,
    /// default rules, built-in word list.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            session_config: SessionConfig::default(),
            words: Arc::new(StaticWordSource::default()),
            session: None,
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the session rules and master secret.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Sets where secret words come from.
    pub fn word_source(mut self, words: impl WordSource) -> Self {
        self.words = Arc::new(words);
        self
    }

    /// Serves an already-built session instead of creating one.
    /// Overrides `session_config` and `word_source`.
    pub fn session(mut self, session: SharedSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Binds the listener and assembles the server.
    pub async fn build(self) -> Result<ImpostorServer, ImpostorError> {
        let listener = TcpListener::bind(&self.bind_addr).await?;

        let session = self.session.unwrap_or_else(|| {
            SharedSession::new(self.session_config, self.words)
        });

        Ok(ImpostorServer { listener, session })
    }
}

impl Default for ImpostorServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Impostor server.
///
/// Call [`run()`](Self::run) to start serving requests.
pub struct ImpostorServer {
    listener: TcpListener,
    session: SharedSession,
}

impl ImpostorServer {
    /// Creates a new builder.
    pub fn builder() -> ImpostorServerBuilder {
        ImpostorServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// A handle to the session this server operates on.
    pub fn session(&self) -> SharedSession {
        self.session.clone()
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), ImpostorError> {
        tracing::info!(addr = ?self.listener.local_addr().ok(), "Impostor server running");

        axum::serve(self.listener, router(self.session)).await?;
        Ok(())
    }
}
