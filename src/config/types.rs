// Core configuration type definitions

use serde::Deserialize;

use super::insight_types::InsightConfig;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Insight provider configuration section
    #[serde(default)]
    pub insight: InsightConfig,
}
