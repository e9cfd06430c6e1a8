#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use moodlist::{config::Config, utils};
use serde_json::{Value, json};

pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const REDIRECT_URI: &str = "http://localhost:3000/callback";
pub const LLM_KEY: &str = "sk-test";
pub const USER_TOKEN: &str = "abc123";
pub const GOOD_CODE: &str = "good-code";
pub const USER_ID: &str = "user-1";
pub const PLAYLIST_ID: &str = "pl-1";
pub const PLAYLIST_URL: &str = "https://open.spotify.com/playlist/pl-1";
pub const EXPIRED_CODE_BODY: &str =
    r#"{"error":"invalid_grant","error_description":"Invalid authorization code"}"#;

/// Token payload answered for [`GOOD_CODE`]. The null and unknown fields
/// must reach the caller as they are.
pub fn token_payload() -> Value {
    json!({
        "access_token": USER_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-1",
        "scope": "playlist-modify-private playlist-modify-public user-read-private",
        "id_token": null,
        "x_extra": "kept"
    })
}

/// Everything the fake provider saw, in arrival order.
#[derive(Debug, Default)]
pub struct Recorded {
    pub token_forms: Vec<HashMap<String, String>>,
    pub searches: Vec<(String, String)>,
    pub identity_lookups: usize,
    pub playlists_created: Vec<Value>,
    pub added_uris: Vec<Vec<String>>,
    pub chat_requests: Vec<Value>,
}

/// In-process stand-in for Spotify's accounts and Web API plus an OpenAI
/// compatible chat endpoint.
#[derive(Clone)]
pub struct FakeProvider {
    pub playlist_name: String,
    pub queries: Vec<String>,
    pub hits: Arc<HashSet<String>>,
    pub fail_track_add: bool,
    pub fail_playlist_create: bool,
    pub chat_content: Option<String>,
    pub recorded: Arc<Mutex<Recorded>>,
}

impl FakeProvider {
    pub fn new(playlist_name: &str, queries: &[&str], hits: &[&str]) -> Self {
        FakeProvider {
            playlist_name: playlist_name.to_string(),
            queries: queries.iter().map(|q| q.to_string()).collect(),
            hits: Arc::new(hits.iter().map(|h| h.to_string()).collect()),
            fail_track_add: false,
            fail_playlist_create: false,
            chat_content: None,
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    pub fn failing_track_add(mut self) -> Self {
        self.fail_track_add = true;
        self
    }

    pub fn failing_playlist_create(mut self) -> Self {
        self.fail_playlist_create = true;
        self
    }

    /// Makes the query-generation call answer with `content` verbatim.
    pub fn with_chat_content(mut self, content: &str) -> Self {
        self.chat_content = Some(content.to_string());
        self
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/token", post(token))
            .route("/v1/search", get(search))
            .route("/v1/me", get(me))
            .route("/v1/users/{user_id}/playlists", post(create_playlist))
            .route("/v1/playlists/{playlist_id}/tracks", post(add_tracks))
            .route("/llm/chat/completions", post(chat))
            .with_state(self.clone())
    }

    pub async fn start(&self) -> SocketAddr {
        spawn(self.router()).await
    }
}

pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Configuration pointing every upstream at the fake provider.
pub fn config_for(addr: SocketAddr) -> Config {
    config_with(addr, &[])
}

/// Like [`config_for`], with individual variables replaced.
pub fn config_with(addr: SocketAddr, overrides: &[(&'static str, &str)]) -> Config {
    let mut pairs: HashMap<&str, String> = HashMap::from([
        ("SPOTIFY_CLIENT_ID", CLIENT_ID.to_string()),
        ("SPOTIFY_CLIENT_SECRET", CLIENT_SECRET.to_string()),
        ("REDIRECT_URI", REDIRECT_URI.to_string()),
        ("OPENAI_API_KEY", LLM_KEY.to_string()),
        ("HTTP_TIMEOUT_SECS", "5".to_string()),
        ("SPOTIFY_API_AUTH_URL", format!("http://{addr}/authorize")),
        ("SPOTIFY_API_TOKEN_URL", format!("http://{addr}/api/token")),
        ("SPOTIFY_API_URL", format!("http://{addr}/v1")),
        ("OPENAI_API_URL", format!("http://{addr}/llm")),
    ]);
    for (key, value) in overrides {
        pairs.insert(*key, value.to_string());
    }
    Config::from_lookup(|key| pairs.get(key).cloned()).unwrap()
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
    )
}

async fn token(
    State(fake): State<FakeProvider>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, String) {
    fake.recorded.lock().unwrap().token_forms.push(form.clone());

    let expected = utils::basic_auth_header(CLIENT_ID, CLIENT_SECRET);
    let basic = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if basic != Some(expected.as_str()) {
        return (
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_client"}"#.to_string(),
        );
    }

    if form.get("code").map(String::as_str) != Some(GOOD_CODE) {
        return (StatusCode::UNAUTHORIZED, EXPIRED_CODE_BODY.to_string());
    }

    (StatusCode::OK, token_payload().to_string())
}

async fn search(
    State(fake): State<FakeProvider>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if bearer(&headers).as_deref() != Some(USER_TOKEN) {
        return unauthorized();
    }

    let query = params.get("q").cloned().unwrap_or_default();
    let limit = params.get("limit").cloned().unwrap_or_default();
    fake.recorded
        .lock()
        .unwrap()
        .searches
        .push((query.clone(), limit));

    let items = if fake.hits.contains(&query) {
        vec![json!({
            "name": format!("{query} (Track)"),
            "uri": format!("spotify:track:{}", query.replace(' ', "")),
            "artists": [{ "name": "Artist One" }, { "name": "Artist Two" }],
            "album": { "images": [{ "url": format!("https://img.example/{}.jpg", query.replace(' ', "")) }] }
        })]
    } else {
        Vec::new()
    };

    (StatusCode::OK, Json(json!({ "tracks": { "items": items } })))
}

async fn me(State(fake): State<FakeProvider>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if bearer(&headers).as_deref() != Some(USER_TOKEN) {
        return unauthorized();
    }
    fake.recorded.lock().unwrap().identity_lookups += 1;
    (StatusCode::OK, Json(json!({ "id": USER_ID })))
}

async fn create_playlist(
    State(fake): State<FakeProvider>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if bearer(&headers).as_deref() != Some(USER_TOKEN) {
        return unauthorized();
    }
    if user_id != USER_ID {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "status": 403, "message": "wrong user" } })),
        );
    }
    if fake.fail_playlist_create {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "status": 403, "message": "Playlist quota exceeded" } })),
        );
    }

    fake.recorded.lock().unwrap().playlists_created.push(body);
    (
        StatusCode::CREATED,
        Json(json!({
            "id": PLAYLIST_ID,
            "external_urls": { "spotify": PLAYLIST_URL }
        })),
    )
}

async fn add_tracks(
    State(fake): State<FakeProvider>,
    headers: HeaderMap,
    Path(playlist_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if bearer(&headers).as_deref() != Some(USER_TOKEN) {
        return unauthorized();
    }
    if fake.fail_track_add || playlist_id != PLAYLIST_ID {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "status": 403, "message": "Insufficient client scope" } })),
        );
    }

    let uris: Vec<String> = body["uris"]
        .as_array()
        .map(|uris| {
            uris.iter()
                .filter_map(|u| u.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    fake.recorded.lock().unwrap().added_uris.push(uris);

    (StatusCode::CREATED, Json(json!({ "snapshot_id": "snap-1" })))
}

async fn chat(
    State(fake): State<FakeProvider>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if bearer(&headers).as_deref() != Some(LLM_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Incorrect API key provided" } })),
        );
    }

    let json_mode = body["response_format"]["type"] == "json_object";
    fake.recorded.lock().unwrap().chat_requests.push(body);

    let content = if json_mode {
        fake.chat_content
            .clone()
            .unwrap_or_else(|| json!({ "queries": fake.queries }).to_string())
    } else {
        format!("  {}\n", fake.playlist_name)
    };

    (
        StatusCode::OK,
        Json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        })),
    )
}
