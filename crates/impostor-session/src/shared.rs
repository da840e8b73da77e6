//! Thread-safe handle to the one game session.
//!
//! Every request handler gets a clone of [`SharedSession`]. All of them
//! point at the same [`GameSession`] behind one `Mutex`, so:
//!
//! - mutations (join, start round, reset) never interleave, and
//! - reads (player page, status) always see a whole state, never one
//!   that is half-way through a reset.
//!
//! The lock is held only for in-memory work. Nothing awaits while holding
//! it, and the word list is read from disk *before* the lock is taken.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    GameSession, LobbyView, Player, PlayerView, Round, SessionConfig,
    SessionError, StatusView, WordSource,
};

/// Cheap-to-clone handle: two `Arc`s.
#[derive(Clone)]
pub struct SharedSession {
    session: Arc<Mutex<GameSession>>,
    words: Arc<dyn WordSource>,
}

impl SharedSession {
    /// Creates a fresh, empty session.
    pub fn new(config: SessionConfig, words: impl WordSource) -> Self {
        Self::from_session(GameSession::new(config), words)
    }

    /// Wraps an already-built session (seeded, custom token generator...).
    pub fn from_session(session: GameSession, words: impl WordSource) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            words: Arc::new(words),
        }
    }

    /// See [`GameSession::join`].
    pub async fn join(
        &self,
        name: &str,
        master_claim: Option<&str>,
    ) -> Result<Player, SessionError> {
        self.session.lock().await.join(name, master_claim)
    }

    /// Loads the word pool, then deals a round.
    /// See [`GameSession::start_round`].
    pub async fn start_round(&self, caller: &str) -> Result<Round, SessionError> {
        let words = self.load_words().await;
        self.session.lock().await.start_round(caller, &words)
    }

    /// See [`GameSession::reset_all`].
    pub async fn reset_all(&self, caller: &str) -> Result<(), SessionError> {
        self.session.lock().await.reset_all(caller)
    }

    /// See [`GameSession::view_as_player`].
    pub async fn view_as_player(
        &self,
        token: &str,
    ) -> Result<PlayerView, SessionError> {
        self.session.lock().await.view_as_player(token)
    }

    /// See [`GameSession::view_status`].
    pub async fn view_status(&self) -> StatusView {
        self.session.lock().await.view_status()
    }

    /// See [`GameSession::view_lobby`].
    pub async fn view_lobby(&self) -> LobbyView {
        self.session.lock().await.view_lobby()
    }

    /// Runs `f` with exclusive access to the session.
    ///
    /// For callers that need several reads or writes to happen as one
    /// atomic step. `f` must not block.
    pub async fn with_session<R>(
        &self,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> R {
        let mut session = self.session.lock().await;
        f(&mut session)
    }

    /// Reads the word pool on the blocking thread pool, since a
    /// file-backed source does disk I/O.
    async fn load_words(&self) -> Vec<String> {
        let words = Arc::clone(&self.words);
        match tokio::task::spawn_blocking(move || words.load_words()).await {
            Ok(words) => words,
            Err(e) => {
                // An empty pool makes start_round report EmptyWordPool.
                tracing::warn!(error = %e, "word source task failed");
                Vec::new()
            }
        }
    }
}
