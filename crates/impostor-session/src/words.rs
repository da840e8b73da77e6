//! Word sources: where secret words come from.
//!
//! The session never reads files itself. It asks a [`WordSource`] for the
//! current pool every time a round starts, so an edited word list takes
//! effect on the next round without a restart.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Words used when the configured word list can't be found.
pub const DEFAULT_WORDS: [&str; 6] = [
    "pizza",
    "montagna",
    "aereo",
    "computer",
    "mare",
    "biblioteca",
];

/// Supplies the pool of candidate secret words.
///
/// Implementations must not fail: when the underlying resource is
/// missing they fall back to something sensible. An *empty* pool is
/// still possible (an empty file, say) and the session turns that into
/// [`SessionError::EmptyWordPool`](crate::SessionError::EmptyWordPool)
/// when a round starts.
pub trait WordSource: Send + Sync + 'static {
    /// Returns the current word pool.
    fn load_words(&self) -> Vec<String>;
}

/// Lets an already type-erased source (`Arc<dyn WordSource>`) be passed
/// wherever a `WordSource` is expected.
impl<W: WordSource + ?Sized> WordSource for Arc<W> {
    fn load_words(&self) -> Vec<String> {
        (**self).load_words()
    }
}

/// A fixed, in-memory word list.
///
/// `Default` yields [`DEFAULT_WORDS`].
#[derive(Debug, Clone)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StaticWordSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

impl WordSource for StaticWordSource {
    fn load_words(&self) -> Vec<String> {
        self.words.clone()
    }
}

/// A newline-delimited word list on disk, re-read on every call.
///
/// Each line is trimmed and blank lines are dropped. If the file can't be
/// read at all, the [`DEFAULT_WORDS`] are used instead.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load_words(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => parse_words(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "word list not found, using built-in words"
                );
                default_words()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "word list unreadable, using built-in words"
                );
                default_words()
            }
        }
    }
}

/// One word per line; surrounding whitespace and empty lines are ignored.
fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect()
}
