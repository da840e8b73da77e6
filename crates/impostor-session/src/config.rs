//! Session configuration and the coarse session phase.

use std::fmt;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for a game session.
///
/// Everything here is supplied out of band (CLI flags, environment) by
/// whoever starts the server. `Default` gives the classic rules but an
/// empty master secret, so real deployments should always go through
/// [`SessionConfig::with_master_secret`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Minimum number of joined players before a round can start.
    ///
    /// Default: 3. With fewer, the impostor would be trivially obvious.
    pub min_players: usize,

    /// Maximum length of a player name, in characters (not bytes).
    ///
    /// Default: 40.
    pub max_name_len: usize,

    /// The shared secret a player must present to claim the Master role.
    /// Compared by exact string match.
    pub master_secret: String,
}

impl SessionConfig {
    /// Default rules with the given master secret.
    pub fn with_master_secret(secret: impl Into<String>) -> Self {
        Self {
            master_secret: secret.into(),
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_name_len: 40,
            master_secret: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionPhase
// ---------------------------------------------------------------------------

/// The coarse lifecycle phase of the session.
///
/// ```text
///   Empty ──(join)──→ Open ──(start round)──→ RoundActive ─┐
///     ↑                                          ↑          │
///     │                                          └──────────┘
///     └─────────────────(reset, from anywhere)──────────────
/// ```
///
/// - **Empty**: nobody has joined yet.
/// - **Open**: players are present, no round has been played.
/// - **RoundActive**: at least one round was started. Every further
///   "start round" draws a fresh word and impostor.
///
/// The phase is derived from the session state, never stored, so it
/// can't drift out of sync with the registry and round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    Open,
    RoundActive,
}

impl SessionPhase {
    /// Returns `true` if a round has been dealt.
    pub fn is_round_active(&self) -> bool {
        matches!(self, Self::RoundActive)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Open => write!(f, "Open"),
            Self::RoundActive => write!(f, "RoundActive"),
        }
    }
}
