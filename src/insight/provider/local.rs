//! Local archive provider
//!
//! Fully offline stand-in for the generative provider. Returns constant
//! pre-recorded text so the app works with no credentials and no network.

/// Offline insight source with fixed archive text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalArchive;

impl LocalArchive {
    pub fn new() -> Self {
        Self
    }

    /// Constant acknowledgment shown in place of generated insight text.
    pub fn insight(&self, _topic: &str) -> String {
        "Local archive synchronization complete. Viewing pre-recorded history.".to_string()
    }

    /// The fixed quick-facts list.
    pub fn quick_stats(&self) -> Vec<String> {
        vec![
            "Rhydon was the very first Pokémon index created.".to_string(),
            "The game was developed by only 9 core people.".to_string(),
            "Capsule Monsters was the original project name.".to_string(),
            "Mew's inclusion was an unauthorized late addition.".to_string(),
            "Satoshi Tajiri's bug collecting hobby inspired the entire concept.".to_string(),
        ]
    }
}
