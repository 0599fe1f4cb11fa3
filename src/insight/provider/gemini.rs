//! Gemini API client
//!
//! Single-shot (non-streaming) calls to the Google Generative Language API.
//! Uses reqwest for HTTP; the worker thread drives these futures on its own
//! current-thread tokio runtime.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::InsightError;

/// Gemini API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseBody {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, max_output_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            max_output_tokens,
        }
    }

    /// Returns the stored model (used in tests)
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the URL: `{GEMINI_API_URL}/{model}:generateContent?key={api_key}`
    fn build_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        )
    }

    /// Build the JSON request body: a single user turn plus the generation
    /// config capping response length.
    fn build_request_body(&self, prompt: &str) -> Result<String, InsightError> {
        let body = RequestBody {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
            },
        };

        serde_json::to_string(&body).map_err(|e| InsightError::Parse {
            provider: "Gemini".to_string(),
            message: format!("Failed to serialize request body: {}", e),
        })
    }

    /// Extract the generated text from a response body, joining the parts of
    /// the first candidate.
    fn parse_response(body: &str) -> Result<String, InsightError> {
        let parsed: ResponseBody =
            serde_json::from_str(body).map_err(|e| InsightError::Parse {
                provider: "Gemini".to_string(),
                message: format!("Invalid response body: {}", e),
            })?;

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

        if text.trim().is_empty() {
            return Err(InsightError::Parse {
                provider: "Gemini".to_string(),
                message: "Response contained no generated text".to_string(),
            });
        }

        Ok(text.trim().to_string())
    }

    /// Run one prompt through the API and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let body = self.build_request_body(prompt)?;
        let url = self.build_url();

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| InsightError::Network {
                provider: "Gemini".to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InsightError::Api {
                provider: "Gemini".to_string(),
                code,
                message,
            });
        }

        let body = response.text().await.map_err(|e| InsightError::Network {
            provider: "Gemini".to_string(),
            message: e.to_string(),
        })?;

        Self::parse_response(&body)
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
