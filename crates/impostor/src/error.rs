//! Unified error type for the gateway, and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use impostor_session::SessionError;

use crate::render;

/// Top-level error for the `impostor` crate.
///
/// Session errors convert automatically through `#[from]`, so handlers
/// can use `?` on any [`SharedSession`](impostor_session::SharedSession)
/// call and let [`IntoResponse`] pick the status code.
#[derive(Debug, thiserror::Error)]
pub enum ImpostorError {
    /// A game rule or authorization failure.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Binding or serving the listener failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImpostorError {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Session(e) => match e {
                SessionError::InvalidName(_)
                | SessionError::MasterAlreadyAssigned => StatusCode::BAD_REQUEST,
                SessionError::InvalidCredential | SessionError::Forbidden => {
                    StatusCode::FORBIDDEN
                }
                SessionError::NotFound(_) => StatusCode::NOT_FOUND,
                SessionError::NotEnoughPlayers { .. } => StatusCode::CONFLICT,
                SessionError::EmptyWordPool
                | SessionError::TokenExhausted(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ImpostorError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Html(render::message_page(&self.to_string(), "/"))).into_response()
    }
}
