//! Text-generation client for the Gemini `generateContent` REST endpoint.

use std::time::Duration;

use serde::Deserialize;

use crate::AiError;

/// HTTP client for a Gemini-compatible text-generation endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a client for the endpoint at `base_url`
    /// (e.g. `https://generativelanguage.googleapis.com`).
    pub fn new(base_url: String, api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            client: crate::http_client(timeout),
            base_url,
            api_key,
            model,
        }
    }

    /// Submit a prompt and return the reply text.
    ///
    /// Sends `POST /v1beta/models/{model}:generateContent` and concatenates
    /// the text parts of the first candidate. A 2xx reply with no text at
    /// all maps to [`AiError::EmptyReply`].
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply_text(reply);
        if text.is_empty() {
            return Err(AiError::EmptyReply);
        }
        Ok(text)
    }
}

/// Concatenate the text parts of the first candidate.
fn reply_text(reply: GenerateResponse) -> String {
    reply
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_parts_of_first_candidate() {
        let reply: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [{ "text": "Hello " }, { "text": "world" }] } },
                    { "content": { "parts": [{ "text": "ignored" }] } }
                ]
            }"#,
        )
        .expect("fixture should parse");
        assert_eq!(reply_text(reply), "Hello world");
    }

    #[test]
    fn empty_when_no_candidates() {
        let reply: GenerateResponse =
            serde_json::from_str(r#"{ "candidates": [] }"#).expect("fixture should parse");
        assert_eq!(reply_text(reply), "");
    }

    #[test]
    fn empty_when_candidate_has_no_content() {
        // Safety-blocked replies come back with a candidate but no content.
        let reply: GenerateResponse =
            serde_json::from_str(r#"{ "candidates": [{ "finishReason": "SAFETY" }] }"#)
                .expect("fixture should parse");
        assert_eq!(reply_text(reply), "");
    }
}
