//! Configuration management for the mood playlist generator.
//!
//! Values are read once at startup into an explicit [`Config`] object that is
//! handed to the collaborators that need it. Nothing is read lazily from the
//! process environment afterwards, so a missing credential surfaces before the
//! first request rather than in the middle of one.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{Error, Res, info, utils};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8888";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Scopes requested from the user during authorization.
pub const SPOTIFY_SCOPE: &str = "playlist-modify-private playlist-modify-public user-read-private";

/// Loads environment variables from `.env` files.
///
/// Looks for `moodlist/.env` in the platform-specific local data directory
/// first and then for a `.env` in the working directory. Neither file is
/// required; values already present in the environment are never overridden.
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/moodlist/.env`
/// - macOS: `~/Library/Application Support/moodlist/.env`
/// - Windows: `%LOCALAPPDATA%/moodlist/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(format!("cannot read .env: {}", e))),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodlist/.env");
    path
}

/// Spotify client credentials and endpoints.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

/// Language model credentials, passed to the interpreter at construction.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub http_timeout: Duration,
    pub spotify: SpotifyConfig,
    pub llm: LlmConfig,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] listing every missing required variable
    /// (`SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, `REDIRECT_URI`,
    /// `OPENAI_API_KEY`) or describing a malformed `HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut required = |key: &'static str| match get(key) {
            Some(value) => value,
            None => {
                missing.push(key);
                String::new()
            }
        };

        let client_id = required("SPOTIFY_CLIENT_ID");
        let client_secret = required("SPOTIFY_CLIENT_SECRET");
        let redirect_uri = required("REDIRECT_URI");
        let api_key = required("OPENAI_API_KEY");

        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "missing required environment variable(s): {}",
                missing.join(", ")
            )));
        }

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(Error::Config(
                        "HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Ok(secs) => Duration::from_secs(secs),
                Err(e) => {
                    return Err(Error::Config(format!(
                        "HTTP_TIMEOUT_SECS '{}' is not a number: {}",
                        raw, e
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            server_addr: or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            http_timeout,
            spotify: SpotifyConfig {
                client_id,
                client_secret,
                redirect_uri,
                auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL),
                token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
                api_url: trim_base(or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)),
            },
            llm: LlmConfig {
                api_key,
                api_url: trim_base(or_default("OPENAI_API_URL", DEFAULT_LLM_API_URL)),
                model: or_default("OPENAI_MODEL", DEFAULT_LLM_MODEL),
            },
        })
    }

    /// Logs the effective configuration with secrets masked.
    pub fn describe(&self) {
        info!("REDIRECT_URI: {}", self.spotify.redirect_uri);
        info!("CLIENT_ID: {}", utils::mask_client_id(&self.spotify.client_id));
        info!("CLIENT_SECRET: *****");
        info!("OPENAI_API_KEY: *****");
        info!("OPENAI_MODEL: {}", self.llm.model);
        info!("HTTP timeout: {}s", self.http_timeout.as_secs());
    }

    /// Shared HTTP client with the configured per-request timeout.
    pub fn http_client(&self) -> Res<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.http_timeout)
            .build()?)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("SPOTIFY_CLIENT_ID", "client-id"),
            ("SPOTIFY_CLIENT_SECRET", "client-secret"),
            ("REDIRECT_URI", "http://localhost:3000/callback"),
            ("OPENAI_API_KEY", "sk-test"),
        ]
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup(&required())).unwrap();

        assert_eq!(config.server_addr, DEFAULT_SERVER_ADDRESS);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.spotify.api_url, DEFAULT_SPOTIFY_API_URL);
        assert_eq!(config.spotify.token_url, DEFAULT_SPOTIFY_TOKEN_URL);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.api_key, "sk-test");
    }

    #[test]
    fn test_missing_required_values_listed_together() {
        let err = Config::from_lookup(lookup(&[("SPOTIFY_CLIENT_ID", "id")])).unwrap_err();

        let msg = err.to_string();
        assert!(matches!(err, Error::Config(_)));
        assert!(msg.contains("SPOTIFY_CLIENT_SECRET"));
        assert!(msg.contains("REDIRECT_URI"));
        assert!(msg.contains("OPENAI_API_KEY"));
        assert!(!msg.contains("SPOTIFY_CLIENT_ID"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut pairs = required();
        pairs[3] = ("OPENAI_API_KEY", "   ");

        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_timeout_parsing() {
        let mut pairs = required();
        pairs.push(("HTTP_TIMEOUT_SECS", "5"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.http_timeout, Duration::from_secs(5));

        let mut zero = required();
        zero.push(("HTTP_TIMEOUT_SECS", "0"));
        assert!(Config::from_lookup(lookup(&zero)).is_err());

        let mut junk = required();
        junk.push(("HTTP_TIMEOUT_SECS", "soon"));
        assert!(Config::from_lookup(lookup(&junk)).is_err());
    }

    #[test]
    fn test_base_urls_lose_trailing_slash() {
        let mut pairs = required();
        pairs.push(("SPOTIFY_API_URL", "http://127.0.0.1:9000/v1/"));
        pairs.push(("OPENAI_API_URL", "http://127.0.0.1:9001/"));

        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.spotify.api_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.llm.api_url, "http://127.0.0.1:9001");
    }
}
