// Insight provider configuration type definitions

use serde::Deserialize;

/// Default number of upcoming milestones the scheduler warms
fn default_prefetch_window() -> usize {
    5
}

/// Default delay before the first prefetch request in milliseconds
fn default_prefetch_base_delay_ms() -> u64 {
    2500
}

/// Default additional spacing per prefetch slot in milliseconds
fn default_prefetch_step_ms() -> u64 {
    1000
}

/// Default max output tokens for generated insights (kept short to fit the
/// detail pane)
fn default_max_output_tokens() -> u32 {
    256
}

/// Insight provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InsightProviderType {
    /// Offline pre-recorded archive, no credentials needed
    #[default]
    Local,
    /// Google Gemini API (requires api_key and model)
    Gemini,
}

/// Gemini-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key for the Generative Language API (required for the gemini provider)
    pub api_key: Option<String>,
    /// Model to use (required - user must specify)
    pub model: Option<String>,
    /// Maximum tokens in a generated response
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: None,
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// Insight section of the configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InsightConfig {
    /// Which insight provider to use
    #[serde(default)]
    pub provider: InsightProviderType,
    /// How many upcoming milestones the prefetch scheduler warms
    #[serde(default = "default_prefetch_window")]
    pub prefetch_window: usize,
    /// Delay before the first prefetch request
    #[serde(default = "default_prefetch_base_delay_ms")]
    pub prefetch_base_delay_ms: u64,
    /// Additional spacing added per prefetch slot; the static spacing is the
    /// rate-limit mechanism, so keep it above the provider's request ceiling
    #[serde(default = "default_prefetch_step_ms")]
    pub prefetch_step_ms: u64,
    /// Gemini-specific configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl Default for InsightConfig {
    fn default() -> Self {
        InsightConfig {
            provider: InsightProviderType::default(),
            prefetch_window: default_prefetch_window(),
            prefetch_base_delay_ms: default_prefetch_base_delay_ms(),
            prefetch_step_ms: default_prefetch_step_ms(),
            gemini: GeminiConfig::default(),
        }
    }
}
