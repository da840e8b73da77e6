//! # Impostor
//!
//! HTTP front end for the Impostor party game.
//!
//! Players join from their phones, the Master starts rounds, and every
//! player refreshes their own page to see the secret word (or learn that
//! they are the impostor). All game rules live in [`impostor_session`];
//! this crate only turns HTTP requests into session operations and the
//! results back into pages and status codes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use impostor::prelude::*;
//!
//! # async fn run() -> Result<(), ImpostorError> {
//! let server = ImpostorServer::builder()
//!     .bind("0.0.0.0:5000")
//!     .session_config(SessionConfig::with_master_secret("let-me-in"))
//!     .word_source(FileWordSource::new("words.txt"))
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod render;
mod server;

pub use error::ImpostorError;
pub use handler::{PlayerSummary, StatusResponse};
pub use server::{router, ImpostorServer, ImpostorServerBuilder};

pub mod prelude {
    pub use crate::{router, ImpostorError, ImpostorServer, ImpostorServerBuilder};
    pub use impostor_session::{
        FileWordSource, GameSession, SessionConfig, SessionError,
        SharedSession, StaticWordSource, WordSource,
    };
}
