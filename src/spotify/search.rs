use reqwest::StatusCode;

use crate::{
    Error, Res,
    spotify::SpotifyClient,
    types::{SearchResponse, Song},
    warning,
};

impl SpotifyClient {
    /// Searches the catalog for tracks matching a free-text query.
    ///
    /// Each result is mapped to a [`Song`]: the artist field joins every
    /// credited artist with `", "` in the order Spotify lists them, and the
    /// album image is the album's first image, if it has any.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search phrase, e.g. `"Queen Bohemian Rhapsody"`
    /// * `token` - Bearer access token of the user
    /// * `limit` - Maximum number of tracks to return
    ///
    /// # Returns
    ///
    /// The matching songs, possibly none. An empty result is not an error.
    ///
    /// # Errors
    ///
    /// [`Error::UpstreamSearch`] for any non-200 response. No retry.
    pub async fn search_tracks(&self, query: &str, token: &str, limit: u32) -> Res<Vec<Song>> {
        let limit = limit.to_string();
        let res = self
            .http
            .get(self.api_url("/search"))
            .bearer_auth(token)
            .query(&[
                ("q", query),
                ("type", "track"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let err = Error::UpstreamSearch {
                status: status.as_u16(),
                body: res.text().await?,
            };
            warning!("{}", err);
            return Err(err);
        }

        let results: SearchResponse = res.json().await?;
        Ok(results.tracks.items.into_iter().map(Song::from).collect())
    }
}
