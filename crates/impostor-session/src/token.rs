//! Player token generation.
//!
//! Tokens are the only credential in the game, so they need to be hard to
//! guess for a casual party, not cryptographically strong. Ten characters
//! from a 62-symbol alphabet gives 62^10 (about 8 * 10^17) possibilities.
//!
//! Generation sits behind the [`TokenGenerator`] trait so tests can swap in
//! predictable or deliberately colliding generators.

use rand::Rng;
use rand::distr::Alphanumeric;

use crate::PlayerToken;

/// Length of every token produced by [`RandomTokenGenerator`].
pub const TOKEN_LEN: usize = 10;

/// Produces opaque player tokens.
///
/// # Trait bounds
///
/// - `Send + Sync` → the generator lives inside the shared session, which
///   request handlers on different threads reach through a mutex.
/// - `'static` → it lives as long as the session.
///
/// The generator itself does not promise uniqueness. The session checks
/// new tokens against the registry and asks again on a collision.
pub trait TokenGenerator: Send + Sync + 'static {
    /// Returns a new token.
    fn generate(&self) -> PlayerToken;
}

/// The default generator: [`TOKEN_LEN`] random ASCII letters and digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> PlayerToken {
        // `Alphanumeric` samples uniformly from A-Z, a-z and 0-9 and
        // yields ASCII bytes, so `char::from` is lossless.
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        PlayerToken::new(token)
    }
}
