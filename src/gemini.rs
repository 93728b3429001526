//! Gemini `generateContent` client and the conversation session handle.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Role of a conversation turn.
///
/// Maps to Gemini API content roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Turn authored by the human user
    User,
    /// Turn authored by the model
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// History of one ongoing conversation with the model.
///
/// Owned by the caller and passed into every [`GeminiClient::send_message`]
/// call; there is no process-wide session.
#[derive(Debug, Clone)]
pub struct ChatSession {
    history: Vec<Content>,
}

impl ChatSession {
    /// Create a session seeded with the opening model turn.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Content::text(Role::Model, "Hello Gemini")],
        }
    }

    /// Number of turns in the conversation so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GeminiClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            model,
        }
    }

    /// Send one user message in the context of `session` and return the model
    /// reply. The session history is committed only after a successful round
    /// trip.
    pub async fn send_message(&self, session: &mut ChatSession, text: &str) -> Result<String> {
        let mut contents = session.history.clone();
        contents.push(Content::text(Role::User, text));

        debug!("Sending request to Gemini API with {} turns", contents.len());

        let request = GenerateContentRequest {
            contents: &contents,
        };
        let url = format!("{GEMINI_API_URL}/{}:generateContent", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(BotError::GeminiApi { status, message });
        }

        let api_response: GenerateContentResponse = response.json().await?;

        let content = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| BotError::GeminiResponse("No candidates in response".to_string()))?
            .content;

        let reply = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if reply.is_empty() {
            return Err(BotError::GeminiResponse(
                "No text parts in candidate".to_string(),
            ));
        }

        contents.push(Content {
            role: Role::Model,
            parts: content.parts,
        });
        session.history = contents;

        debug!("Received response from Gemini API");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_gemini_wire_format() {
        let contents = vec![Content::text(Role::User, "hi")];
        let request = GenerateContentRequest {
            contents: &contents,
        };

        let value = serde_json::to_value(&request).expect("request is serializable");
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "hi" }] }
                ]
            })
        );
    }

    #[test]
    fn response_candidates_parse() {
        let body = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "hello" }] } }
            ]
        }"#;

        let response: GenerateContentResponse =
            serde_json::from_str(body).expect("response parses");
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].content.parts[0].text, "hello");
    }

    #[test]
    fn response_without_candidates_parses_empty() {
        let response: GenerateContentResponse =
            serde_json::from_str("{}").expect("empty response parses");
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn new_session_starts_with_seed_turn() {
        let session = ChatSession::new();
        assert_eq!(session.len(), 1);
        assert_eq!(session.history[0].role, Role::Model);
    }
}
