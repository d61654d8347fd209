//! The network half of state sync: one method per server operation, each a
//! single round trip returning either the state fields to merge or a typed
//! failure. Nothing here touches the view; settlement handlers in `app` do.

use thiserror::Error;

use unofelt_protocol::{Card, ErrorBody, GameStateBody, PlayCardResponse};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The request never completed (connect/timeout/IO).
    #[error("transport: {0}")]
    Transport(String),
    /// The server answered and said no; the message is user-facing.
    #[error("{0}")]
    Rejected(String),
    /// The server answered 2xx with a body we could not parse.
    #[error("decode: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct GameApi {
    http: reqwest::Client,
    base_url: String,
}

impl GameApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        GameApi { http: reqwest::Client::new(), base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/gamestate` — the full authoritative snapshot.
    pub async fn fetch_state(&self) -> Result<GameStateBody, SyncError> {
        let resp = self
            .http
            .get(self.url("/api/gamestate"))
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        decode_state(resp).await
    }

    /// `POST /api/draw_card` — draw one card, no body.
    pub async fn draw_card(&self) -> Result<GameStateBody, SyncError> {
        let resp = self
            .http
            .post(self.url("/api/draw_card"))
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        decode_state(resp).await
    }

    /// `POST /api/play_card` with the chosen card's `{color, value}`.
    /// A `success: false` verdict surfaces as [`SyncError::Rejected`] with
    /// the server's own message.
    pub async fn play_card(&self, card: Card) -> Result<GameStateBody, SyncError> {
        let resp = self
            .http
            .post(self.url("/api/play_card"))
            .json(&card)
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Rejected(error_message(resp, status).await));
        }
        let verdict: PlayCardResponse = resp
            .json()
            .await
            .map_err(|e| SyncError::Decode(e.to_string()))?;
        if verdict.success == Some(false) {
            return Err(SyncError::Rejected(
                verdict.message.unwrap_or_else(|| "play rejected".into()),
            ));
        }
        Ok(verdict.state)
    }

    /// `POST /api/end_turn` — hand the turn to the opponent and receive the
    /// full post-turn state.
    pub async fn end_turn(&self) -> Result<GameStateBody, SyncError> {
        let resp = self
            .http
            .post(self.url("/api/end_turn"))
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        decode_state(resp).await
    }
}

async fn decode_state(resp: reqwest::Response) -> Result<GameStateBody, SyncError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(SyncError::Rejected(error_message(resp, status).await));
    }
    resp.json::<GameStateBody>()
        .await
        .map_err(|e| SyncError::Decode(e.to_string()))
}

/// Prefer the server's JSON error body; fall back to the status line when
/// the body is absent or not JSON.
async fn error_message(resp: reqwest::Response, status: reqwest::StatusCode) -> String {
    resp.json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("server error ({})", status))
}
