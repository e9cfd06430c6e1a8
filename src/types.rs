use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value};
use tabled::Tabled;

pub const DEFAULT_NUM_SONGS: u32 = 10;

fn default_num_songs() -> u32 {
    DEFAULT_NUM_SONGS
}

/// Request body of `/generate-playlist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRequest {
    pub mood_description: String,
    #[serde(default = "default_num_songs")]
    pub num_songs: u32,
}

impl MoodRequest {
    pub fn new(mood_description: impl Into<String>, num_songs: u32) -> Self {
        Self {
            mood_description: mood_description.into(),
            num_songs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateParams {
    pub access_token: Option<String>,
}

/// Normalized track record built from a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub uri: String,
    pub album_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub playlist_name: String,
    pub songs: Vec<Song>,
    pub spotify_playlist_url: Option<String>,
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub name: String,
    pub artist: String,
    pub uri: String,
}

impl From<&Song> for SongTableRow {
    fn from(song: &Song) -> Self {
        SongTableRow {
            name: song.name.clone(),
            artist: song.artist.clone(),
            uri: song.uri.clone(),
        }
    }
}

/// Token payload of the authorization code exchange.
///
/// The well-known fields are parsed for convenience, but the payload is kept
/// verbatim and is what gets serialized: null and unknown fields reach the
/// caller exactly as Spotify sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    raw: Map<String, Value>,
}

#[derive(Deserialize)]
struct TokenFields {
    access_token: String,
    token_type: String,
    expires_in: u64,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

impl TokenResponse {
    /// The payload as received.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl<'de> Deserialize<'de> for TokenResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let fields: TokenFields =
            serde_json::from_value(Value::Object(raw.clone())).map_err(de::Error::custom)?;

        Ok(TokenResponse {
            access_token: fields.access_token,
            token_type: fields.token_type,
            expires_in: fields.expires_in,
            refresh_token: fields.refresh_token,
            scope: fields.scope,
            raw,
        })
    }
}

impl Serialize for TokenResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Mood interpretation returned by the language model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub playlist_name: String,
    pub queries: Vec<String>,
}

// Spotify wire formats

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

impl From<Track> for Song {
    fn from(track: Track) -> Self {
        Song {
            name: track.name,
            artist: track
                .artists
                .iter()
                .map(|artist| artist.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            uri: track.uri,
            album_image: track.album.images.into_iter().next().map(|image| image.url),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

// Chat completion wire formats

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongQueries {
    pub queries: Vec<String>,
}
