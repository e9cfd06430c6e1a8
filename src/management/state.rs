use crate::{Res, config::Config, management::PlaylistGenerator, spotify::SpotifyClient};

/// State shared by every HTTP handler.
///
/// Holds only clients and configuration; no tokens, sessions or caches are
/// kept between requests.
#[derive(Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
    pub generator: PlaylistGenerator,
}

impl AppState {
    pub fn new(spotify: SpotifyClient, generator: PlaylistGenerator) -> Self {
        AppState { spotify, generator }
    }

    pub fn from_config(config: &Config) -> Res<Self> {
        Ok(Self::new(
            SpotifyClient::from_config(config)?,
            PlaylistGenerator::from_config(config)?,
        ))
    }
}
