use reqwest::{Client, StatusCode};

use crate::{
    Error, Res,
    config::LlmConfig,
    types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat},
    warning,
};

/// Minimal chat-completion client for OpenAI compatible endpoints.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    config: LlmConfig,
}

impl ChatClient {
    pub fn new(config: LlmConfig, http: Client) -> Self {
        ChatClient { http, config }
    }

    /// Sends one chat completion request and returns the first choice's text.
    ///
    /// With `json_mode` set the request asks the provider for a JSON object
    /// response (`response_format = {"type": "json_object"}`).
    ///
    /// A missing or null `content` in the first choice is returned as an
    /// empty string; interpreting it is up to the caller.
    ///
    /// # Errors
    ///
    /// - [`Error::UpstreamLlm`] for any non-200 response
    /// - [`Error::InterpretationParse`] if the response has no choices
    pub async fn complete(&self, messages: Vec<ChatMessage>, json_mode: bool) -> Res<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            response_format: json_mode.then(|| ResponseFormat {
                kind: "json_object".to_string(),
            }),
        };

        let res = self
            .http
            .post(format!("{}/chat/completions", self.config.api_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status != StatusCode::OK {
            let err = Error::UpstreamLlm {
                status: status.as_u16(),
                body,
            };
            warning!("{}", err);
            return Err(err);
        }

        let response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| Error::InterpretationParse {
                reason: e.to_string(),
                raw: body.clone(),
            })?;

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.unwrap_or_default()),
            None => Err(Error::InterpretationParse {
                reason: "response contained no choices".to_string(),
                raw: body,
            }),
        }
    }
}
