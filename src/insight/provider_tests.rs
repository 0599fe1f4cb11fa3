//! Tests for the provider boundary: config validation, sentinel detection,
//! and the never-fails fetch contract for the local variant.

use super::*;
use crate::config::insight_types::{GeminiConfig, InsightConfig, InsightProviderType};

/// Helper to run async tests with a tokio runtime
fn run_async<F: std::future::Future>(f: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");
    rt.block_on(f)
}

fn gemini_config(api_key: Option<&str>, model: Option<&str>) -> InsightConfig {
    InsightConfig {
        provider: InsightProviderType::Gemini,
        gemini: GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: model.map(str::to_string),
            ..GeminiConfig::default()
        },
        ..InsightConfig::default()
    }
}

#[test]
fn test_from_config_local_default() {
    let provider = InsightProvider::from_config(&InsightConfig::default()).unwrap();
    assert_eq!(provider.provider_name(), "Local archive");
}

#[test]
fn test_from_config_gemini_with_credentials() {
    let config = gemini_config(Some("key"), Some("gemini-2.0-flash"));
    let provider = InsightProvider::from_config(&config).unwrap();
    assert_eq!(provider.provider_name(), "Gemini");
}

#[test]
fn test_from_config_gemini_missing_api_key() {
    let err = InsightProvider::from_config(&gemini_config(None, Some("m"))).unwrap_err();
    match err {
        InsightError::NotConfigured { provider, message } => {
            assert_eq!(provider, "Gemini");
            assert!(message.contains("api_key"));
        }
        other => panic!("expected NotConfigured, got {:?}", other),
    }
}

#[test]
fn test_from_config_gemini_blank_api_key_rejected() {
    let err = InsightProvider::from_config(&gemini_config(Some("   "), Some("m"))).unwrap_err();
    assert!(matches!(err, InsightError::NotConfigured { .. }));
}

#[test]
fn test_from_config_gemini_missing_model() {
    let err = InsightProvider::from_config(&gemini_config(Some("key"), None)).unwrap_err();
    match err {
        InsightError::NotConfigured { message, .. } => assert!(message.contains("model")),
        other => panic!("expected NotConfigured, got {:?}", other),
    }
}

#[test]
fn test_local_fetch_insight_never_fails() {
    let provider = InsightProvider::Local(LocalArchive::new());
    let text = run_async(provider.fetch_insight("The Beginning Gen I"));
    assert!(!text.is_empty());
    assert!(!is_error_text(&text));
}

#[test]
fn test_local_quick_stats() {
    let provider = InsightProvider::Local(LocalArchive::new());
    let facts = run_async(provider.quick_stats());
    assert_eq!(facts.len(), 5);
}

#[test]
fn test_is_quota_only_for_429() {
    let quota = InsightError::Api {
        provider: "Gemini".to_string(),
        code: 429,
        message: "RESOURCE_EXHAUSTED".to_string(),
    };
    assert!(quota.is_quota());

    let server_error = InsightError::Api {
        provider: "Gemini".to_string(),
        code: 500,
        message: "internal".to_string(),
    };
    assert!(!server_error.is_quota());

    let network = InsightError::Network {
        provider: "Gemini".to_string(),
        message: "timeout".to_string(),
    };
    assert!(!network.is_quota());
}

#[test]
fn test_is_error_text_detects_sentinels() {
    assert!(is_error_text(&format!("{} busy", QUOTA_PREFIX)));
    assert!(is_error_text(FALLBACK_INSIGHT));
    assert!(!is_error_text("A real insight about Kanto."));
    // The prefix must be at the start of the string
    assert!(!is_error_text("note: QUOTA_REACHED: mid-string"));
}
