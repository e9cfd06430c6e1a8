use crate::{Error, Res, types::SongQueries};

pub const QUERY_SYSTEM_PROMPT: &str =
    "You are a music expert that suggests songs matching specific moods.";

pub const NAME_SYSTEM_PROMPT: &str = "You have an experience in the music industry, and you are a creative playlist naming assistant";

pub fn song_queries_prompt(mood_description: &str, num_songs: u32) -> String {
    format!(
        r#"Generate {num_songs} specific song search queries based on the following mood description:
"{mood_description}"

Each query should be a SIMPLE search term without special formatting.
For example: "Adele Hello" or "Ed Sheeran Shape of You" or "Queen Bohemian Rhapsody"

Format your response as a JSON object with a "queries" array.
Example: {{"queries": ["Adele Hello", "Ed Sheeran Shape of You"]}}"#
    )
}

pub fn playlist_name_prompt(mood_description: &str) -> String {
    format!(
        r#"Create a catchy, fun and descriptive playlist name based on this mood description:
"{mood_description}"

Return ONLY the playlist name as plain text, no quotes, asterisk or explanation"#
    )
}

/// Parses the query-generation answer into at most `num_songs` search phrases.
///
/// Blank entries are dropped and every phrase is trimmed.
///
/// # Errors
///
/// [`Error::InterpretationParse`] carrying the raw model text when the answer
/// is not JSON or has no `queries` array of strings.
pub fn parse_song_queries(raw: &str, num_songs: u32) -> Res<Vec<String>> {
    let parsed: SongQueries =
        serde_json::from_str(raw.trim()).map_err(|e| Error::InterpretationParse {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    Ok(parsed
        .queries
        .into_iter()
        .map(|query| query.trim().to_string())
        .filter(|query| !query.is_empty())
        .take(num_songs as usize)
        .collect())
}

/// # Errors
///
/// [`Error::InterpretationParse`] when the model returned only whitespace.
pub fn parse_playlist_name(raw: &str) -> Res<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::InterpretationParse {
            reason: "empty playlist name".to_string(),
            raw: raw.to_string(),
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_song_queries() {
        let raw = r#"{"queries": ["Adele Hello", " Queen Bohemian Rhapsody ", ""]}"#;
        let queries = parse_song_queries(raw, 10).unwrap();
        assert_eq!(queries, vec!["Adele Hello", "Queen Bohemian Rhapsody"]);
    }

    #[test]
    fn test_parse_song_queries_caps_at_requested_count() {
        let raw = r#"{"queries": ["a", "b", "c", "d"]}"#;
        let queries = parse_song_queries(raw, 2).unwrap();
        assert_eq!(queries, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_song_queries_missing_key() {
        let raw = r#"{"songs": ["Adele Hello"]}"#;
        match parse_song_queries(raw, 3) {
            Err(Error::InterpretationParse { raw: body, reason }) => {
                assert_eq!(body, raw);
                assert!(reason.contains("queries"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_song_queries_malformed_json() {
        let raw = "Here are some songs: Adele Hello";
        let err = parse_song_queries(raw, 3).unwrap_err();
        assert_eq!(err.kind(), "interpretation_parse");
        assert!(err.to_string().contains("Here are some songs"));
    }

    #[test]
    fn test_parse_playlist_name() {
        assert_eq!(parse_playlist_name("  Run Fuel \n").unwrap(), "Run Fuel");
        assert!(parse_playlist_name("   ").is_err());
    }

    #[test]
    fn test_prompts_embed_mood_and_count() {
        let prompt = song_queries_prompt("rainy sunday", 7);
        assert!(prompt.contains("Generate 7 specific song search queries"));
        assert!(prompt.contains("\"rainy sunday\""));
        assert!(prompt.contains(r#"{"queries": ["Adele Hello", "Ed Sheeran Shape of You"]}"#));

        let prompt = playlist_name_prompt("rainy sunday");
        assert!(prompt.contains("\"rainy sunday\""));
    }
}
