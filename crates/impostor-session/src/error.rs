//! Error types for the session layer.

use crate::PlayerToken;

/// Errors that can occur while operating on the game session.
///
/// None of these are fatal to the process. Each one is reported to the
/// caller of a single request, and every failing operation leaves the
/// session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The submitted player name is empty after trimming, or too long.
    /// The player can simply try again with a different name.
    #[error("invalid player name: {0}")]
    InvalidName(String),

    /// Someone asked for the Master role, but the session already has one.
    /// There is exactly one Master per session until a full reset.
    #[error("a master is already assigned to this session")]
    MasterAlreadyAssigned,

    /// The master credential didn't match the configured secret.
    #[error("invalid master credential")]
    InvalidCredential,

    /// The caller tried a Master-only operation (start round, reset)
    /// without holding the current master token.
    #[error("only the master can do this")]
    Forbidden,

    /// No player is registered under the given token. Happens for
    /// made-up tokens and for every token issued before a reset.
    #[error("no player with token {0}")]
    NotFound(PlayerToken),

    /// A round needs at least `required` players; only `present` joined.
    #[error("at least {required} players are needed to start (currently {present})")]
    NotEnoughPlayers { required: usize, present: usize },

    /// The word source produced no words, so there is nothing to draw
    /// a secret from. This is a configuration problem, not a player one.
    #[error("the word pool is empty; check the configured word list")]
    EmptyWordPool,

    /// The token generator kept producing tokens that are already taken.
    #[error("could not generate a unique player token after {0} attempts")]
    TokenExhausted(usize),
}

impl SessionError {
    /// Returns `true` for errors the player can fix by retrying with
    /// different input or once the session conditions change.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::EmptyWordPool | Self::TokenExhausted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enough_players_message_includes_counts() {
        let err = SessionError::NotEnoughPlayers {
            required: 3,
            present: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_is_recoverable_distinguishes_configuration_errors() {
        assert!(SessionError::MasterAlreadyAssigned.is_recoverable());
        assert!(SessionError::Forbidden.is_recoverable());
        assert!(!SessionError::EmptyWordPool.is_recoverable());
        assert!(!SessionError::TokenExhausted(8).is_recoverable());
    }
}
