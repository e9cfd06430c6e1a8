//! # Spotify Integration Module
//!
//! Thin client over the three Spotify surfaces the generator touches:
//!
//! ```text
//! Playlist Generator
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization code grant, client secret)
//!     ├── Catalog Search (track search)
//!     └── Playlist Operations (identity, create, add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Authorization code exchange
//! - `GET /search` - Track search
//! - `GET /me` - Current user identity
//! - `POST /users/{user_id}/playlists` - Create playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks
//!
//! Every call is attempted exactly once. A non-success status is logged with
//! the provider's body and returned as the matching [`crate::Error`] variant.
//! The access token is supplied per call and never stored.
//!
//! The generator talks to this module through the [`CatalogSearch`] and
//! [`PlaylistWriter`] traits so tests can swap in mocks.

pub mod auth;
pub mod playlist;
pub mod search;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    Res,
    config::{Config, SpotifyConfig},
    types::Song,
};

/// Resolves free-text queries to catalog tracks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    async fn search(&self, query: &str, access_token: &str, limit: u32) -> Res<Vec<Song>>;
}

/// Persists a list of tracks as a new playlist on the user's account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaylistWriter: Send + Sync {
    /// Creates the playlist and returns its public URL.
    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
        track_uris: &[String],
        access_token: &str,
    ) -> Res<String>;
}

/// Spotify Web API client.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection
/// pool between clones.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: SpotifyConfig,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig, http: Client) -> Self {
        SpotifyClient { http, config }
    }

    pub fn from_config(config: &Config) -> Res<Self> {
        Ok(Self::new(config.spotify.clone(), config.http_client()?))
    }

    pub fn config(&self) -> &SpotifyConfig {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        format!("{base}{path}", base = self.config.api_url)
    }
}

#[async_trait]
impl CatalogSearch for SpotifyClient {
    async fn search(&self, query: &str, access_token: &str, limit: u32) -> Res<Vec<Song>> {
        self.search_tracks(query, access_token, limit).await
    }
}

#[async_trait]
impl PlaylistWriter for SpotifyClient {
    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
        track_uris: &[String],
        access_token: &str,
    ) -> Res<String> {
        self.create_playlist_with_tracks(name, description, track_uris, access_token)
            .await
    }
}
