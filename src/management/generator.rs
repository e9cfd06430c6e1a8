use std::sync::Arc;

use crate::{
    Error, Res,
    config::Config,
    info,
    llm::{MoodInterpreter, OpenAiInterpreter},
    spotify::{CatalogSearch, PlaylistWriter, SpotifyClient},
    success,
    types::{MoodRequest, PlaylistResult, Song},
    utils,
};

/// Composes mood interpretation, catalog search and playlist writing.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct PlaylistGenerator {
    interpreter: Arc<dyn MoodInterpreter>,
    catalog: Arc<dyn CatalogSearch>,
    writer: Arc<dyn PlaylistWriter>,
}

impl PlaylistGenerator {
    pub fn new(
        interpreter: Arc<dyn MoodInterpreter>,
        catalog: Arc<dyn CatalogSearch>,
        writer: Arc<dyn PlaylistWriter>,
    ) -> Self {
        PlaylistGenerator {
            interpreter,
            catalog,
            writer,
        }
    }

    /// Wires the generator to the real Spotify and language model clients.
    pub fn from_config(config: &Config) -> Res<Self> {
        let spotify = Arc::new(SpotifyClient::from_config(config)?);
        let interpreter = Arc::new(OpenAiInterpreter::from_config(config)?);
        Ok(Self::new(interpreter, spotify.clone(), spotify))
    }

    /// Generates a playlist for a mood on the token owner's account.
    ///
    /// 1. Normalize the access token.
    /// 2. Interpret the mood into a name and search queries.
    /// 3. Search the queries one after another with a limit of one, keeping
    ///    the first match of each, and stop as soon as `num_songs` songs are
    ///    collected. Later queries are never issued.
    /// 4. Fail with [`Error::NoMatchingSongs`] if nothing matched. No playlist
    ///    is created in that case.
    /// 5. Create the playlist with the collected tracks in match order.
    ///
    /// Fewer matches than requested is still a success.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingToken`] / [`Error::InvalidRequest`] before any
    ///   upstream call when the input is unusable
    /// - [`Error::NoMatchingSongs`] as described above
    /// - [`Error::Orchestration`] wrapping the typed failure of the
    ///   interpretation, a search, or the playlist write
    pub async fn generate(&self, request: &MoodRequest, access_token: &str) -> Res<PlaylistResult> {
        let token = utils::normalize_token(access_token);
        if token.is_empty() {
            return Err(Error::MissingToken);
        }
        if request.num_songs == 0 {
            return Err(Error::InvalidRequest(
                "num_songs must be at least 1".to_string(),
            ));
        }

        let interpretation = self
            .interpreter
            .interpret(&request.mood_description, request.num_songs)
            .await
            .map_err(Error::orchestration)?;
        info!("Generated {} song queries", interpretation.queries.len());

        let songs = self
            .collect_songs(&interpretation.queries, &token, request.num_songs as usize)
            .await
            .map_err(Error::orchestration)?;

        if songs.is_empty() {
            return Err(Error::NoMatchingSongs);
        }
        info!("Found {} songs", songs.len());

        let uris: Vec<String> = songs.iter().map(|song| song.uri.clone()).collect();
        let description = utils::playlist_description(&request.mood_description);

        let playlist_url = self
            .writer
            .create_playlist(&interpretation.playlist_name, &description, &uris, &token)
            .await
            .map_err(Error::orchestration)?;
        success!("Playlist {} created", interpretation.playlist_name);

        Ok(PlaylistResult {
            playlist_name: interpretation.playlist_name,
            songs,
            spotify_playlist_url: Some(playlist_url),
        })
    }

    async fn collect_songs(&self, queries: &[String], token: &str, wanted: usize) -> Res<Vec<Song>> {
        let mut songs: Vec<Song> = Vec::new();

        for query in queries {
            if songs.len() >= wanted {
                break;
            }

            info!("Processing query: {}", query);
            let found = self.catalog.search(query, token, 1).await?;

            if let Some(song) = found.into_iter().next() {
                info!("Added song: {} by {}", song.name, song.artist);
                songs.push(song);
            }
        }

        Ok(songs)
    }
}
