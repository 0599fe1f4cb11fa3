//! Insight provider abstraction
//!
//! The fetch boundary: resolves a free-text topic into insight text, either
//! through the Gemini API or the fully local archive. The boundary never
//! fails to the caller: transport and quota failures are converted to
//! sentinel/fallback strings here, so the cache, scheduler, and UI only ever
//! see ordinary text.

use thiserror::Error;

use crate::config::insight_types::{InsightConfig, InsightProviderType};

use super::prompt::{build_insight_prompt, build_stats_prompt};

mod gemini;
mod local;

pub use gemini::GeminiClient;
pub use local::LocalArchive;

/// Prefix tagging a quota-exhaustion sentinel. The display layer branches on
/// it to show the "archive busy" message; sentinel text is never cached so
/// the key stays retryable.
pub const QUOTA_PREFIX: &str = "QUOTA_REACHED:";

/// Generic apology shown for non-quota failures.
pub const FALLBACK_INSIGHT: &str =
    "The archive is unreachable right now. Please try this entry again in a moment.";

const QUOTA_MESSAGE: &str =
    " The Professor is answering too many calls right now. Try again shortly.";

/// Errors internal to the provider layer. None of these cross the fetch
/// boundary; they are mapped to sentinel or fallback strings below.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InsightError {
    /// Provider selected but missing credentials
    #[error("[{provider}] not configured: {message}")]
    NotConfigured { provider: String, message: String },

    /// Network error during the API request
    #[error("[{provider}] network error: {message}")]
    Network { provider: String, message: String },

    /// API returned an error response
    #[error("[{provider}] API error ({code}): {message}")]
    Api {
        provider: String,
        code: u16,
        message: String,
    },

    /// Failed to parse the API response
    #[error("[{provider}] parse error: {message}")]
    Parse { provider: String, message: String },
}

impl InsightError {
    /// Whether this failure is rate-limit exhaustion (HTTP 429,
    /// RESOURCE_EXHAUSTED in the Gemini error vocabulary).
    pub fn is_quota(&self) -> bool {
        matches!(self, InsightError::Api { code: 429, .. })
    }
}

/// Swappable insight source. The cache and scheduler are agnostic to which
/// variant is active.
#[derive(Debug, Clone)]
pub enum InsightProvider {
    Gemini(GeminiClient),
    Local(LocalArchive),
}

impl InsightProvider {
    /// Returns the display name of the provider
    pub fn provider_name(&self) -> &'static str {
        match self {
            InsightProvider::Gemini(_) => "Gemini",
            InsightProvider::Local(_) => "Local archive",
        }
    }

    /// Create a provider from configuration.
    ///
    /// Returns an error when Gemini is selected without credentials; the
    /// caller falls back to the local archive and surfaces a warning.
    pub fn from_config(config: &InsightConfig) -> Result<Self, InsightError> {
        match config.provider {
            InsightProviderType::Local => Ok(InsightProvider::Local(LocalArchive::new())),
            InsightProviderType::Gemini => {
                let api_key = config
                    .gemini
                    .api_key
                    .as_ref()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| InsightError::NotConfigured {
                        provider: "Gemini".to_string(),
                        message: "Missing API key. Add 'api_key' in the [insight.gemini] \
                                  section of ~/.config/pokehist/config.toml."
                            .to_string(),
                    })?;

                let model = config
                    .gemini
                    .model
                    .as_ref()
                    .filter(|m| !m.trim().is_empty())
                    .ok_or_else(|| InsightError::NotConfigured {
                        provider: "Gemini".to_string(),
                        message: "Missing model. Add 'model' in the [insight.gemini] section \
                                  (e.g., 'gemini-2.0-flash')."
                            .to_string(),
                    })?;

                Ok(InsightProvider::Gemini(GeminiClient::new(
                    api_key.clone(),
                    model.clone(),
                    config.gemini.max_output_tokens,
                )))
            }
        }
    }

    /// Resolve a topic into insight text. Always returns a string: real
    /// content, a quota sentinel, or the generic fallback.
    pub async fn fetch_insight(&self, topic: &str) -> String {
        match self {
            InsightProvider::Local(archive) => archive.insight(topic),
            InsightProvider::Gemini(client) => {
                match client.generate(&build_insight_prompt(topic)).await {
                    Ok(text) => text,
                    Err(e) if e.is_quota() => {
                        log::warn!("Quota exhausted fetching insight for '{}'", topic);
                        format!("{}{}", QUOTA_PREFIX, QUOTA_MESSAGE)
                    }
                    Err(e) => {
                        log::error!("Insight fetch failed for '{}': {}", topic, e);
                        FALLBACK_INSIGHT.to_string()
                    }
                }
            }
        }
    }

    /// Resolve the quick-facts list. Falls back to the local archive's fixed
    /// facts on any failure, so the panel always has content.
    pub async fn quick_stats(&self) -> Vec<String> {
        match self {
            InsightProvider::Local(archive) => archive.quick_stats(),
            InsightProvider::Gemini(client) => {
                match client.generate(&build_stats_prompt()).await {
                    Ok(text) => {
                        let facts: Vec<String> = text
                            .lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_string)
                            .collect();
                        if facts.is_empty() {
                            LocalArchive::new().quick_stats()
                        } else {
                            facts
                        }
                    }
                    Err(e) => {
                        log::error!("Quick stats fetch failed: {}", e);
                        LocalArchive::new().quick_stats()
                    }
                }
            }
        }
    }
}

/// Whether a fetched string is a sentinel/fallback rather than real content.
/// Such results are displayed but never cached, so the key is retried on the
/// next selection.
pub fn is_error_text(text: &str) -> bool {
    text.starts_with(QUOTA_PREFIX) || text == FALLBACK_INSIGHT
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
