use reqwest::StatusCode;

use crate::{
    Error, Res, info,
    spotify::SpotifyClient,
    types::{AddTrackToPlaylistRequest, CreatePlaylistRequest, CreatePlaylistResponse, CurrentUser},
    utils, warning,
};

fn created(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

impl SpotifyClient {
    /// Resolves the id of the user the token belongs to (`GET /me`).
    ///
    /// # Errors
    ///
    /// [`Error::UpstreamIdentity`] for any non-200 response.
    pub async fn current_user_id(&self, token: &str) -> Res<String> {
        let res = self
            .http
            .get(self.api_url("/me"))
            .bearer_auth(token)
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let err = Error::UpstreamIdentity {
                status: status.as_u16(),
                body: res.text().await?,
            };
            warning!("{}", err);
            return Err(err);
        }

        let user: CurrentUser = res.json().await?;
        Ok(user.id)
    }

    /// Creates an empty public playlist owned by `user_id`.
    ///
    /// # Errors
    ///
    /// [`Error::UpstreamPlaylistCreate`] when the status is neither 200 nor 201.
    pub async fn create(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        token: &str,
    ) -> Res<CreatePlaylistResponse> {
        let request = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: true,
        };

        let res = self
            .http
            .post(self.api_url(&format!("/users/{user_id}/playlists")))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        if !created(status) {
            let err = Error::UpstreamPlaylistCreate {
                status: status.as_u16(),
                body: res.text().await?,
            };
            warning!("{}", err);
            return Err(err);
        }

        Ok(res.json().await?)
    }

    /// Appends tracks to a playlist in a single request, preserving order.
    ///
    /// # Errors
    ///
    /// [`Error::UpstreamTrackAdd`] when the status is neither 200 nor 201.
    pub async fn add_tracks(&self, playlist_id: &str, uris: &[String], token: &str) -> Res<()> {
        let request = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let res = self
            .http
            .post(self.api_url(&format!("/playlists/{playlist_id}/tracks")))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        if !created(status) {
            let err = Error::UpstreamTrackAdd {
                status: status.as_u16(),
                body: res.text().await?,
            };
            warning!("{}", err);
            return Err(err);
        }

        Ok(())
    }

    /// Creates a playlist on the token owner's account and fills it.
    ///
    /// Runs three calls in sequence, each only if the previous one succeeded:
    /// identity lookup, playlist creation, track append. The token is
    /// normalized first (whitespace and wrapping quotes stripped).
    ///
    /// If adding the tracks fails, the freshly created playlist stays behind
    /// empty; no compensation is attempted.
    ///
    /// # Returns
    ///
    /// The playlist's public Spotify URL (`external_urls.spotify`).
    pub async fn create_playlist_with_tracks(
        &self,
        name: &str,
        description: &str,
        uris: &[String],
        token: &str,
    ) -> Res<String> {
        let token = utils::normalize_token(token);

        let user_id = self.current_user_id(&token).await?;
        let playlist = self.create(&user_id, name, description, &token).await?;
        info!("Created playlist {} ({})", name, playlist.id);

        self.add_tracks(&playlist.id, uris, &token).await?;
        info!("Added {} tracks to playlist {}", uris.len(), playlist.id);

        Ok(playlist.external_urls.spotify)
    }
}
