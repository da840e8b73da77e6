//! Read-only snapshots handed out to the gateway.
//!
//! Each view is an owned copy taken while the session lock is held, so it
//! stays consistent after the lock is released.

use crate::{Player, Round, SessionPhase};

/// What one player sees on their own page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub player: Player,
    pub round: Round,
    /// `true` only while a round is active and this player was drawn.
    pub is_impostor: bool,
    /// `true` if this player holds the Master role.
    pub is_master: bool,
}

impl PlayerView {
    /// The word this player should see, if any.
    ///
    /// `None` before the first round and for the impostor.
    pub fn visible_word(&self) -> Option<&str> {
        if self.is_impostor {
            None
        } else {
            self.round.secret_word()
        }
    }
}

/// Unauthenticated aggregate view: every player plus the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Players in join order.
    pub players: Vec<Player>,
    pub round: Round,
    pub phase: SessionPhase,
}

/// What the join page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyView {
    /// Players in join order.
    pub players: Vec<Player>,
    /// Whether the Master role is already taken.
    pub master_exists: bool,
}
