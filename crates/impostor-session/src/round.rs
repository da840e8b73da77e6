//! Round state: the round counter plus the secret word and impostor.

use crate::PlayerToken;

/// The secret half of a dealt round.
///
/// The word and the impostor are bundled in one struct so that they can
/// only ever be set (or cleared) together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSecret {
    /// The word every non-impostor sees.
    pub word: String,
    /// The player who sees nothing.
    pub impostor: PlayerToken,
}

/// The current round.
///
/// `number == 0` means no round has been dealt yet. In that state there is
/// no secret; from round 1 onwards there always is one. Holding the secret
/// as `Option<RoundSecret>` makes "word set but impostor missing" (or the
/// reverse) unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    number: u64,
    secret: Option<RoundSecret>,
}

impl Round {
    /// The round counter. 0 until the first round starts.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Returns `true` once at least one round has been dealt.
    pub fn is_active(&self) -> bool {
        self.number > 0
    }

    pub fn secret(&self) -> Option<&RoundSecret> {
        self.secret.as_ref()
    }

    pub fn secret_word(&self) -> Option<&str> {
        self.secret.as_ref().map(|s| s.word.as_str())
    }

    pub fn impostor_token(&self) -> Option<&PlayerToken> {
        self.secret.as_ref().map(|s| &s.impostor)
    }

    /// Returns `true` if `token` is the impostor of the active round.
    pub fn is_impostor(&self, token: &str) -> bool {
        self.is_active()
            && self
                .impostor_token()
                .is_some_and(|impostor| impostor.as_str() == token)
    }

    /// Moves to the next round with a freshly drawn secret.
    pub(crate) fn advance(&mut self, secret: RoundSecret) {
        self.number += 1;
        self.secret = Some(secret);
    }
}
