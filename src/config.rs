// Configuration module for pokehist
// This module handles loading and parsing configuration from ~/.config/pokehist/config.toml

pub mod insight_types;
mod types;

pub use types::Config;

use std::fs;
use std::path::PathBuf;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/pokehist/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/pokehist/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pokehist")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::insight_types::InsightProviderType;
    use proptest::prelude::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.insight.provider, InsightProviderType::Local);
        assert_eq!(config.insight.prefetch_window, 5);
        assert_eq!(config.insight.prefetch_base_delay_ms, 2500);
        assert_eq!(config.insight.prefetch_step_ms, 1000);
        assert!(config.insight.gemini.api_key.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[insight]
provider = "gemini"
prefetch_window = 3
prefetch_base_delay_ms = 2000
prefetch_step_ms = 500

[insight.gemini]
api_key = "test-key"
model = "gemini-2.0-flash"
max_output_tokens = 512
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.insight.provider, InsightProviderType::Gemini);
        assert_eq!(config.insight.prefetch_window, 3);
        assert_eq!(config.insight.prefetch_base_delay_ms, 2000);
        assert_eq!(config.insight.prefetch_step_ms, 500);
        assert_eq!(config.insight.gemini.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.insight.gemini.max_output_tokens, 512);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.insight.provider, InsightProviderType::Local);
        assert_eq!(config.insight.prefetch_window, 5);
    }

    #[test]
    fn test_invalid_provider_fails_to_parse() {
        let toml_content = r#"
[insight]
provider = "skynet"
"#;
        let config: Result<Config, _> = toml::from_str(toml_content);
        assert!(config.is_err());
    }

    // For any malformed TOML syntax, load_config falls back to defaults;
    // parsing itself must reject the input.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_malformed_toml_rejected(
            malformed in prop::sample::select(vec![
                "[insight\nprovider = \"local\"",
                "[insight]\nprovider = local",
                "[insight]\n provider",
                "insight]\nprovider = \"local\"",
                "[insight]\nprovider = \"local",
            ])
        ) {
            let config: Result<Config, _> = toml::from_str(malformed);
            prop_assert!(config.is_err(), "Malformed TOML should fail to parse");

            let default_config = Config::default();
            prop_assert_eq!(
                default_config.insight.provider,
                InsightProviderType::Local,
                "Fallback config should use the local provider"
            );
        }
    }

    // Any valid [insight] section round-trips its values.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_insight_config_parsing(
            window in 1usize..10,
            base_ms in 100u64..10_000u64,
            step_ms in 0u64..5_000u64,
            max_tokens in 64u32..2048u32,
        ) {
            let toml_content = format!(r#"
[insight]
provider = "gemini"
prefetch_window = {}
prefetch_base_delay_ms = {}
prefetch_step_ms = {}

[insight.gemini]
api_key = "k"
model = "gemini-2.0-flash"
max_output_tokens = {}
"#, window, base_ms, step_ms, max_tokens);

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.insight.prefetch_window, window);
            prop_assert_eq!(config.insight.prefetch_base_delay_ms, base_ms);
            prop_assert_eq!(config.insight.prefetch_step_ms, step_ms);
            prop_assert_eq!(config.insight.gemini.max_output_tokens, max_tokens);
        }
    }
}
