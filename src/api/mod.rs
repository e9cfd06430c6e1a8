//! # API Module
//!
//! JSON-over-HTTP handlers of the playlist service. Every handler receives the
//! shared [`crate::management::AppState`] through an `Extension` layer and
//! returns [`crate::Res`], so failures render through
//! [`crate::Error`]'s `IntoResponse` implementation as
//! `{"detail": ..., "kind": ..., "cause": ...}`.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version
//! - [`auth_url`] - `GET /auth-url`, the Spotify authorization URL
//! - [`get_token`] - `POST /get-token`, authorization code exchange
//! - [`generate_playlist`] - `POST /generate-playlist`, the full mood to
//!   playlist flow
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use moodlist::{management::AppState, server};
//!
//! let app = server::router(Arc::new(AppState::from_config(&config)?));
//! ```

mod auth;
mod health;
mod playlist;

pub use auth::auth_url;
pub use auth::get_token;
pub use health::health;
pub use playlist::generate_playlist;
