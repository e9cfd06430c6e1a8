//! Error types for the mood playlist generator.
//!
//! Every upstream non-success response is surfaced as a typed variant that
//! carries the provider's status code and the raw response body. Nothing is
//! retried or downgraded.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while generating a playlist or serving requests.
#[derive(Debug, Error)]
pub enum Error {
    /// The token endpoint refused the authorization code exchange.
    ///
    /// The body is kept verbatim: redirect URI mismatches and expired codes
    /// are only diagnosable from Spotify's own message.
    #[error("Failed to get access token: {status}\nSpotify response: {body}")]
    UpstreamAuth { status: u16, body: String },

    /// The track search endpoint returned a non-200 status.
    #[error("Failed to search Spotify: {status}\nSpotify response: {body}")]
    UpstreamSearch { status: u16, body: String },

    /// The `/me` lookup returned a non-200 status.
    #[error("Failed to get user info: {status}\nSpotify response: {body}")]
    UpstreamIdentity { status: u16, body: String },

    /// Playlist creation returned a status outside of 200/201.
    #[error("Failed to create playlist: {status}\nSpotify response: {body}")]
    UpstreamPlaylistCreate { status: u16, body: String },

    /// Adding tracks returned a status outside of 200/201.
    ///
    /// The playlist already exists at this point and stays behind empty.
    #[error("Failed to add tracks to playlist: {status}\nSpotify response: {body}")]
    UpstreamTrackAdd { status: u16, body: String },

    /// The language model endpoint returned a non-200 status.
    #[error("Language model request failed: {status}\nProvider response: {body}")]
    UpstreamLlm { status: u16, body: String },

    /// The model answered, but not with the JSON shape we asked for.
    #[error("Failed to parse language model response: {reason}\nRaw response: {raw}")]
    InterpretationParse { reason: String, raw: String },

    /// None of the generated queries resolved to a track.
    #[error("Could not find any matching songs")]
    NoMatchingSongs,

    /// A sub-step of playlist generation failed. The originating error is
    /// kept as the source so callers can still branch on its kind.
    #[error("Playlist generation failed: {0}")]
    Orchestration(#[source] Box<Error>),

    /// `/generate-playlist` was called without a usable access token.
    #[error("Missing access token")]
    MissingToken,

    /// The request itself was malformed (e.g. `num_songs` of zero).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or malformed configuration, reported at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to (de)serialize JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File or socket I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, Error>`.
pub type Res<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps a sub-step failure for the orchestrator boundary.
    ///
    /// Already wrapped errors are passed through so the chain never nests
    /// more than one level.
    pub fn orchestration(err: Error) -> Self {
        if matches!(err, Error::Orchestration(_)) {
            err
        } else {
            Error::Orchestration(Box::new(err))
        }
    }

    /// Returns the innermost typed error, looking through `Orchestration`.
    pub fn cause(&self) -> &Error {
        match self {
            Error::Orchestration(inner) => inner.cause(),
            other => other,
        }
    }

    /// Stable, machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UpstreamAuth { .. } => "upstream_auth",
            Error::UpstreamSearch { .. } => "upstream_search",
            Error::UpstreamIdentity { .. } => "upstream_identity",
            Error::UpstreamPlaylistCreate { .. } => "upstream_playlist_create",
            Error::UpstreamTrackAdd { .. } => "upstream_track_add",
            Error::UpstreamLlm { .. } => "upstream_llm",
            Error::InterpretationParse { .. } => "interpretation_parse",
            Error::NoMatchingSongs => "no_matching_songs",
            Error::Orchestration(_) => "orchestration",
            Error::MissingToken => "missing_token",
            Error::InvalidRequest(_) => "invalid_request",
            Error::Config(_) => "config",
            Error::Http(_) => "http",
            Error::Json(_) => "json",
            Error::Io(_) => "io",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::UpstreamAuth { .. }
            | Error::NoMatchingSongs
            | Error::MissingToken
            | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = json!({
            "detail": self.to_string(),
            "kind": self.kind(),
            "cause": self.cause().kind(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}
