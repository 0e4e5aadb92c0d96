use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AiError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The model used for all text generation.
pub const MODEL: &str = "gemini-2.5-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
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

/// Client for the Generative Language `generateContent` endpoint.
///
/// Constructed once at startup and cloned into handlers. The API key is
/// optional so a keyless deployment still boots; calls then fail with
/// [`AiError::MissingApiKey`] and the caller decides what to serve instead.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GenAiClient {
    pub fn new(api_key: Option<String>) -> Self {
        GenAiClient {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send prompt parts and return the concatenated candidate text.
    pub async fn generate(&self, parts: &[String]) -> Result<String, AiError> {
        let key = self.api_key.as_deref().ok_or(AiError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: parts
                    .iter()
                    .map(|text| Part { text: text.clone() })
                    .collect(),
            }],
        };

        let url = format!("{}/models/{MODEL}:generateContent", self.base_url);
        let resp = self
            .http
            .post(&url)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(AiError::Invocation {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| AiError::ResponseParse(e.to_string()))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AiError::EmptyResponse);
        }

        debug!(chars = text.len(), "generation complete");
        Ok(text)
    }
}
