//! # Language Model Module
//!
//! Turns a mood description into a playlist title and one plain search phrase
//! per requested song. Two independent chat calls are made for every
//! interpretation, nothing is cached, and identical input may produce
//! different output.

mod client;
pub mod prompts;

pub use client::ChatClient;

use async_trait::async_trait;

use crate::{
    Res,
    config::{Config, LlmConfig},
    info,
    types::{ChatMessage, Interpretation},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoodInterpreter: Send + Sync {
    /// Produces a playlist title and at most `num_songs` search queries.
    async fn interpret(&self, mood_description: &str, num_songs: u32) -> Res<Interpretation>;
}

/// [`MoodInterpreter`] backed by an OpenAI compatible chat completion API.
///
/// The API key, endpoint and model come from the [`LlmConfig`] handed in at
/// construction, so tests and callers can point it anywhere.
#[derive(Debug, Clone)]
pub struct OpenAiInterpreter {
    chat: ChatClient,
}

impl OpenAiInterpreter {
    pub fn new(config: LlmConfig, http: reqwest::Client) -> Self {
        OpenAiInterpreter {
            chat: ChatClient::new(config, http),
        }
    }

    pub fn from_config(config: &Config) -> Res<Self> {
        Ok(Self::new(config.llm.clone(), config.http_client()?))
    }

    /// Asks the model for `num_songs` search phrases in JSON object mode.
    pub async fn generate_song_queries(
        &self,
        mood_description: &str,
        num_songs: u32,
    ) -> Res<Vec<String>> {
        info!("Generating song queries for mood: {}", mood_description);

        let content = self
            .chat
            .complete(
                vec![
                    ChatMessage::system(prompts::QUERY_SYSTEM_PROMPT),
                    ChatMessage::user(prompts::song_queries_prompt(mood_description, num_songs)),
                ],
                true,
            )
            .await?;

        let queries = prompts::parse_song_queries(&content, num_songs)?;
        info!("Parsed {} queries", queries.len());
        Ok(queries)
    }

    /// Asks the model for a bare playlist title.
    pub async fn generate_playlist_name(&self, mood_description: &str) -> Res<String> {
        let content = self
            .chat
            .complete(
                vec![
                    ChatMessage::system(prompts::NAME_SYSTEM_PROMPT),
                    ChatMessage::user(prompts::playlist_name_prompt(mood_description)),
                ],
                false,
            )
            .await?;

        prompts::parse_playlist_name(&content)
    }
}

#[async_trait]
impl MoodInterpreter for OpenAiInterpreter {
    async fn interpret(&self, mood_description: &str, num_songs: u32) -> Res<Interpretation> {
        let playlist_name = self.generate_playlist_name(mood_description).await?;
        info!("Generated playlist name: {}", playlist_name);

        let queries = self
            .generate_song_queries(mood_description, num_songs)
            .await?;

        Ok(Interpretation {
            playlist_name,
            queries,
        })
    }
}
