//! The shared Impostor game session.
//!
//! One group of players joins a single global game. One of them claims the
//! **Master** role with a shared secret, and the Master starts rounds: every
//! player receives the same secret word except one randomly drawn
//! **impostor**, who receives nothing.
//!
//! This crate holds everything with real invariants:
//!
//! 1. **Registry** — who has joined ([`Player`], keyed by [`PlayerToken`])
//! 2. **Master role** — at most one master, claimed once per session
//! 3. **Rounds** — secret word + impostor drawn together ([`Round`])
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP gateway (impostor crate)  ← routes, pages, status codes
//!     ↕
//! SharedSession (this crate)     ← one mutex, consistent snapshots
//!     ↕
//! GameSession (this crate)       ← the state machine itself
//!     ↕
//! WordSource / TokenGenerator    ← leaf providers, injectable
//! ```

mod config;
mod error;
mod manager;
mod player;
mod round;
mod shared;
mod token;
mod view;
mod words;

pub use config::{SessionConfig, SessionPhase};
pub use error::SessionError;
pub use manager::GameSession;
pub use player::{Player, PlayerToken};
pub use round::{Round, RoundSecret};
pub use shared::SharedSession;
pub use token::{RandomTokenGenerator, TokenGenerator, TOKEN_LEN};
pub use view::{LobbyView, PlayerView, StatusView};
pub use words::{FileWordSource, StaticWordSource, WordSource, DEFAULT_WORDS};
