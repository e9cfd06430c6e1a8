use reqwest::{StatusCode, header::AUTHORIZATION};
use url::Url;

use crate::{
    Error, Res, config::SPOTIFY_SCOPE, info, spotify::SpotifyClient, types::TokenResponse,
    utils, warning,
};

impl SpotifyClient {
    /// Builds the URL the user visits to grant the application access.
    ///
    /// The URL carries the configured client id and redirect URI together with
    /// the fixed scope set `playlist-modify-private playlist-modify-public
    /// user-read-private`. Query values are percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configured authorization endpoint is
    /// not a valid URL.
    ///
    /// # Example
    ///
    /// ```
    /// let url = spotify.authorize_url()?;
    /// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
    /// ```
    pub fn authorize_url(&self) -> Res<String> {
        let url = Url::parse_with_params(
            &self.config.auth_url,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("scope", SPOTIFY_SCOPE),
            ],
        )
        .map_err(|e| {
            Error::Config(format!(
                "invalid authorization URL '{}': {}",
                self.config.auth_url, e
            ))
        })?;

        Ok(url.to_string())
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Posts a form-encoded `authorization_code` grant to the token endpoint,
    /// authenticating with the client id and secret as HTTP Basic
    /// credentials. Exactly one attempt is made.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code received on the redirect URI
    ///
    /// # Returns
    ///
    /// The token payload exactly as Spotify returned it, null and unknown
    /// fields included.
    ///
    /// # Errors
    ///
    /// - [`Error::UpstreamAuth`] with Spotify's status and raw body for any
    ///   non-200 response (expired code, redirect URI mismatch, bad client
    ///   credentials)
    /// - [`Error::Http`] for transport failures and timeouts
    /// - [`Error::Json`] if a 200 response does not contain a token payload
    pub async fn exchange_code(&self, code: &str) -> Res<TokenResponse> {
        info!("Token request details:");
        info!("Endpoint: {}", self.config.token_url);
        info!("Redirect URI: {}", self.config.redirect_uri);
        info!("Auth code length: {} characters", code.len());

        let res = self
            .http
            .post(&self.config.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&self.config.client_id, &self.config.client_secret),
            )
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status != StatusCode::OK {
            let err = Error::UpstreamAuth {
                status: status.as_u16(),
                body,
            };
            warning!("{}", err);
            return Err(err);
        }

        Ok(serde_json::from_str(&body)?)
    }
}
