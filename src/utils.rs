use base64::{Engine, engine::general_purpose::STANDARD};

/// Cleans up an access token received from an untrusted hop.
///
/// Surrounding whitespace is stripped, and when the value arrives wrapped in a
/// pair of literal double quotes (already JSON-encoded upstream) the quotes are
/// removed as well. Normalizing an already clean token returns it unchanged.
///
/// # Example
///
/// ```
/// assert_eq!(normalize_token("  \"abc123\" "), "abc123");
/// assert_eq!(normalize_token("abc123"), "abc123");
/// ```
pub fn normalize_token(token: &str) -> String {
    let trimmed = token.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.to_string()
}

/// Builds the value of an HTTP Basic `Authorization` header from client
/// credentials (`Basic base64(id:secret)`).
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {encoded}")
}

/// Shortened form of a token that is safe to print.
pub fn token_preview(token: &str) -> String {
    if token.chars().count() > 10 {
        let prefix: String = token.chars().take(10).collect();
        format!("{prefix}...")
    } else {
        "Invalid access token".to_string()
    }
}

/// Masks a client identifier down to its first five characters.
pub fn mask_client_id(client_id: &str) -> String {
    let prefix: String = client_id.chars().take(5).collect();
    format!("{prefix}...")
}

/// Description stored on every generated playlist.
pub fn playlist_description(mood_description: &str) -> String {
    format!("Generated based on mood: {mood_description}")
}

pub fn parse_num_songs(value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(0) => Err("number of songs must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid number of songs '{value}': {e}")),
    }
}
