//! The game session: player registry, master role and rounds.
//!
//! This is the central piece of the crate. It's responsible for:
//! - Registering players as they join and issuing their tokens
//! - Granting the Master role at most once per session
//! - Dealing rounds (secret word + impostor) on the Master's request
//! - Wiping everything on a full reset
//!
//! # Concurrency note
//!
//! `GameSession` is NOT thread-safe by itself: every operation takes
//! `&self` or `&mut self` and runs to completion without suspending.
//! [`SharedSession`](crate::SharedSession) wraps it in a single mutex so
//! that every request sees and produces a whole, consistent state.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::{
    LobbyView, Player, PlayerToken, PlayerView, RandomTokenGenerator, Round,
    RoundSecret, SessionConfig, SessionError, SessionPhase, StatusView,
    TokenGenerator,
};

/// How many times `join` asks the generator for an unused token.
const MAX_TOKEN_ATTEMPTS: usize = 8;

/// The single game session.
///
/// ## Lifecycle
///
/// ```text
/// join() ──→ join() ──→ join(master) ──→ start_round() ──→ start_round() ...
///                                              │
///                                              ▼
///                                         reset_all() ──→ (empty again)
/// ```
///
/// ## Invariants
///
/// - At most one player has `is_master`, and `master` holds its token.
/// - `master` and the round's impostor always name registered players.
///   Players are only ever removed by `reset_all`, which clears the master
///   and the round in the same step.
/// - The round number only grows, except when a reset sets it back to 0.
pub struct GameSession {
    /// All registered players, keyed by token.
    players: HashMap<PlayerToken, Player>,

    /// Tokens in the order players joined. Kept in sync with `players`;
    /// used for display and as the slice the impostor is drawn from.
    join_order: Vec<PlayerToken>,

    /// Token of the Master, once someone has claimed the role.
    master: Option<PlayerToken>,

    round: Round,

    config: SessionConfig,

    tokens: Box<dyn TokenGenerator>,

    /// Randomness for word and impostor draws. Seedable for tests.
    rng: StdRng,
}

impl GameSession {
    /// Creates an empty session with OS-seeded randomness.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates an empty session whose draws are reproducible.
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, rng: StdRng) -> Self {
        Self {
            players: HashMap::new(),
            join_order: Vec::new(),
            master: None,
            round: Round::default(),
            config,
            tokens: Box::new(RandomTokenGenerator),
            rng,
        }
    }

    /// Replaces the token generator.
    pub fn with_token_generator(
        mut self,
        tokens: impl TokenGenerator,
    ) -> Self {
        self.tokens = Box::new(tokens);
        self
    }

    /// Registers a new player.
    ///
    /// `master_claim` is `None` for an ordinary player and
    /// `Some(credential)` for a player asking for the Master role. A claim
    /// is all-or-nothing: if it fails, nobody joins.
    ///
    /// Duplicate names are fine; each player gets their own token.
    ///
    /// # Errors
    /// - [`SessionError::InvalidName`] — empty (after trimming) or too long
    /// - [`SessionError::MasterAlreadyAssigned`] — the role is taken
    /// - [`SessionError::InvalidCredential`] — wrong master secret
    /// - [`SessionError::TokenExhausted`] — no unused token could be found
    pub fn join(
        &mut self,
        name: &str,
        master_claim: Option<&str>,
    ) -> Result<Player, SessionError> {
        let name = self.validate_name(name)?;

        let is_master = match master_claim {
            None => false,
            Some(credential) => {
                // Role availability is checked first so a taken role is
                // reported even when the credential is also wrong.
                if self.master.is_some() {
                    return Err(SessionError::MasterAlreadyAssigned);
                }
                if credential != self.config.master_secret {
                    return Err(SessionError::InvalidCredential);
                }
                true
            }
        };

        let token = self.fresh_token()?;
        let player = Player::new(name, token.clone(), is_master);

        self.players.insert(token.clone(), player.clone());
        self.join_order.push(token.clone());
        if is_master {
            self.master = Some(token);
        }

        tracing::info!(
            name = %player.name(),
            master = is_master,
            players = self.players.len(),
            "player joined"
        );
        Ok(player)
    }

    /// Deals a new round: next number, fresh word, fresh impostor.
    ///
    /// `caller` is the token presented by whoever asked; only the Master's
    /// token is accepted. The impostor is drawn uniformly from *every*
    /// player, the Master included, with no memory of earlier rounds.
    ///
    /// `words` is the pool to draw from, loaded by the caller so that any
    /// file I/O happens before the session is locked.
    ///
    /// On error the round is left untouched.
    ///
    /// # Errors
    /// - [`SessionError::Forbidden`] — `caller` isn't the Master
    /// - [`SessionError::NotEnoughPlayers`] — below `min_players`
    /// - [`SessionError::EmptyWordPool`] — `words` is empty
    pub fn start_round(
        &mut self,
        caller: &str,
        words: &[String],
    ) -> Result<Round, SessionError> {
        self.authorize_master(caller)?;

        let present = self.players.len();
        let not_enough = SessionError::NotEnoughPlayers {
            required: self.config.min_players,
            present,
        };
        if present < self.config.min_players {
            return Err(not_enough);
        }

        // Draw both halves before touching the round so a failure can't
        // leave it half-updated.
        let word = words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SessionError::EmptyWordPool)?;
        let impostor = self
            .join_order
            .choose(&mut self.rng)
            .cloned()
            .ok_or(not_enough)?;

        self.round.advance(RoundSecret { word, impostor });

        tracing::info!(
            round = self.round.number(),
            players = present,
            "round started"
        );
        Ok(self.round.clone())
    }

    /// Wipes the session: no players, no master, round 0.
    ///
    /// Only the Master may do this. All old tokens stop working.
    ///
    /// # Errors
    /// Returns [`SessionError::Forbidden`] if `caller` isn't the Master.
    pub fn reset_all(&mut self, caller: &str) -> Result<(), SessionError> {
        self.authorize_master(caller)?;

        let removed = self.players.len();
        self.players.clear();
        self.join_order.clear();
        self.master = None;
        self.round = Round::default();

        tracing::info!(removed, "session reset");
        Ok(())
    }

    /// Returns what the player holding `token` should see.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] for unknown tokens.
    pub fn view_as_player(
        &self,
        token: &str,
    ) -> Result<PlayerView, SessionError> {
        let player = self
            .players
            .get(token)
            .ok_or_else(|| SessionError::NotFound(PlayerToken::new(token)))?;

        Ok(PlayerView {
            player: player.clone(),
            round: self.round.clone(),
            is_impostor: self.round.is_impostor(token),
            is_master: self.is_master(token),
        })
    }

    /// Snapshot of every player and the round. Needs no token.
    pub fn view_status(&self) -> StatusView {
        StatusView {
            players: self.players().cloned().collect(),
            round: self.round.clone(),
            phase: self.phase(),
        }
    }

    /// Snapshot for the join page.
    pub fn view_lobby(&self) -> LobbyView {
        LobbyView {
            players: self.players().cloned().collect(),
            master_exists: self.master.is_some(),
        }
    }

    /// Succeeds only if `caller` is the current Master's token.
    ///
    /// # Errors
    /// Returns [`SessionError::Forbidden`] otherwise, including when no
    /// Master exists yet.
    pub fn authorize_master(&self, caller: &str) -> Result<(), SessionError> {
        if self.is_master(caller) {
            Ok(())
        } else {
            tracing::debug!("master-only operation refused");
            Err(SessionError::Forbidden)
        }
    }

    /// Players in join order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.join_order
            .iter()
            .filter_map(|token| self.players.get(token))
    }

    pub fn master_token(&self) -> Option<&PlayerToken> {
        self.master.as_ref()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The coarse lifecycle phase, derived from the current state.
    pub fn phase(&self) -> SessionPhase {
        if self.round.is_active() {
            SessionPhase::RoundActive
        } else if self.players.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Open
        }
    }

    /// Number of registered players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if nobody has joined.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn is_master(&self, token: &str) -> bool {
        self.master
            .as_ref()
            .is_some_and(|master| master.as_str() == token)
    }

    fn validate_name(&self, name: &str) -> Result<String, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::InvalidName(
                "name must not be empty".into(),
            ));
        }
        let max = self.config.max_name_len;
        if name.chars().count() > max {
            return Err(SessionError::InvalidName(format!(
                "name must be at most {max} characters"
            )));
        }
        Ok(name.to_string())
    }

    fn fresh_token(&self) -> Result<PlayerToken, SessionError> {
        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let token = self.tokens.generate();
            if !self.players.contains_key(&token) {
                return Ok(token);
            }
            tracing::warn!("token collision, generating another");
        }
        Err(SessionError::TokenExhausted(MAX_TOKEN_ATTEMPTS))
    }
}

// =========================================================================
// Tests
// =========================================================================
