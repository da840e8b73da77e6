//! Player identity: the opaque token and the registry record.

use std::borrow::Borrow;
use std::fmt;

// ---------------------------------------------------------------------------
// PlayerToken
// ---------------------------------------------------------------------------

/// The opaque bearer token that identifies a player.
///
/// A newtype around `String` so a token can't be mixed up with a name or
/// a secret word, even though all three are strings underneath. Whoever
/// holds the token *is* the player: it travels in URL paths and hidden
/// form fields, and there is no other credential.
///
/// `Borrow<str>` lets the registry be queried with a plain `&str` taken
/// straight from a request, without allocating a `PlayerToken` first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerToken(String);

impl PlayerToken {
    /// Wraps an existing token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlayerToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A player registered in the session.
///
/// Created on join and only ever removed by a full reset. All three
/// fields are fixed at creation: a player can't be renamed, re-tokened or
/// promoted afterwards. The registry owns every `Player`; everything
/// else refers to players by [`PlayerToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    token: PlayerToken,
    is_master: bool,
}

impl Player {
    pub(crate) fn new(name: String, token: PlayerToken, is_master: bool) -> Self {
        Self {
            name,
            token,
            is_master,
        }
    }

    /// Display name, already trimmed. Not unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> &PlayerToken {
        &self.token
    }

    pub fn is_master(&self) -> bool {
        self.is_master
    }
}
