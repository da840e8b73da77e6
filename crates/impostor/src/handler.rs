//! Request handlers: one per route.
//!
//! Each handler does three things:
//!   1. Pull inputs out of the request (path, form, query)
//!   2. Call exactly one `SharedSession` operation
//!   3. Turn the result into a page, a redirect, or an error status
//!
//! The session lock is taken and released inside step 2; rendering
//! happens on an owned snapshot, outside the lock.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use impostor_session::{SessionError, SharedSession, StatusView};
use serde::{Deserialize, Serialize};

use crate::render;
use crate::ImpostorError;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Fields posted by the join form.
///
/// Every field is optional at the HTTP level; a missing name is treated
/// like an empty one. The `is_master` checkbox only shows up when ticked.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct JoinForm {
    #[serde(default)]
    name: String,
    is_master: Option<String>,
    master_pwd: Option<String>,
}

/// The master token, carried as a hidden form field or `?token=`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TokenParams {
    token: Option<String>,
}

/// JSON body of `GET /api/status`.
///
/// Deliberately leaves out tokens, the secret word and the impostor:
/// anyone can poll this endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub players: Vec<PlayerSummary>,
    pub round: u64,
    pub word_selected: bool,
    pub phase: String,
}

/// One entry of [`StatusResponse::players`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub is_master: bool,
}

impl From<StatusView> for StatusResponse {
    fn from(status: StatusView) -> Self {
        Self {
            players: status
                .players
                .iter()
                .map(|p| PlayerSummary {
                    name: p.name().to_string(),
                    is_master: p.is_master(),
                })
                .collect(),
            round: status.round.number(),
            word_selected: status.round.secret().is_some(),
            phase: status.phase.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /` — join form and lobby.
pub(crate) async fn home(State(session): State<SharedSession>) -> Html<String> {
    Html(render::home_page(&session.view_lobby().await))
}

/// `POST /join` — register a player, optionally as Master.
pub(crate) async fn join(
    State(session): State<SharedSession>,
    Form(form): Form<JoinForm>,
) -> Result<Redirect, ImpostorError> {
    if form.name.trim().is_empty() {
        return Ok(Redirect::to("/"));
    }

    // The password is trimmed here, then compared exactly by the session.
    let master_claim = form
        .is_master
        .is_some()
        .then(|| form.master_pwd.as_deref().unwrap_or_default().trim());

    let player = session.join(&form.name, master_claim).await?;
    Ok(Redirect::to(&format!("/player/{}", player.token())))
}

/// `GET /player/{token}` — a player's own page.
pub(crate) async fn player(
    State(session): State<SharedSession>,
    Path(token): Path<String>,
) -> Result<Html<String>, ImpostorError> {
    let view = session.view_as_player(&token).await?;
    Ok(Html(render::player_page(&view)))
}

/// `GET /status` — public overview page.
pub(crate) async fn status(State(session): State<SharedSession>) -> Html<String> {
    Html(render::status_page(&session.view_status().await))
}

/// `GET /api/status` — the same overview as JSON, for polling clients.
pub(crate) async fn status_json(
    State(session): State<SharedSession>,
) -> Json<StatusResponse> {
    Json(session.view_status().await.into())
}

/// `POST /start` (and `/start_round`) — Master deals a new round.
///
/// Too few players is not an HTTP error: the Master gets a page saying
/// so, with a link back, and the round is unchanged.
pub(crate) async fn start_round(
    State(session): State<SharedSession>,
    Query(query): Query<TokenParams>,
    form: Result<Form<TokenParams>, FormRejection>,
) -> Result<Response, ImpostorError> {
    let token = caller_token(query, form);

    match session.start_round(&token).await {
        Ok(_) => Ok(Redirect::to(&format!("/player/{token}")).into_response()),
        Err(e @ SessionError::NotEnoughPlayers { .. }) => {
            tracing::debug!(error = %e, "round not started");
            let back = format!("/player/{token}");
            Ok(Html(render::message_page(&format!("Error: {e}"), &back))
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// `POST /reset` (and `/reset_game`) — Master wipes the session.
pub(crate) async fn reset(
    State(session): State<SharedSession>,
    Query(query): Query<TokenParams>,
    form: Result<Form<TokenParams>, FormRejection>,
) -> Result<Redirect, ImpostorError> {
    let token = caller_token(query, form);
    session.reset_all(&token).await?;
    Ok(Redirect::to("/"))
}

/// The query string wins over the form body; a missing token becomes the
/// empty string, which never matches a Master.
fn caller_token(
    query: TokenParams,
    form: Result<Form<TokenParams>, FormRejection>,
) -> String {
    query
        .token
        .or_else(|| form.ok().and_then(|Form(f)| f.token))
        .unwrap_or_default()
}
