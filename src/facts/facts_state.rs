//! Quick-facts panel state
//!
//! Filled once at startup from a single QuickStats request.

/// Maximum number of facts shown in the panel.
pub const MAX_VISIBLE_FACTS: usize = 4;

#[derive(Debug, Default)]
pub struct FactsState {
    facts: Vec<String>,
}

impl FactsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_facts(&mut self, facts: Vec<String>) {
        self.facts = facts;
    }

    pub fn is_loaded(&self) -> bool {
        !self.facts.is_empty()
    }

    /// The facts shown in the panel, capped at [`MAX_VISIBLE_FACTS`].
    pub fn visible(&self) -> &[String] {
        let end = self.facts.len().min(MAX_VISIBLE_FACTS);
        &self.facts[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let facts = FactsState::new();
        assert!(!facts.is_loaded());
        assert!(facts.visible().is_empty());
    }

    #[test]
    fn test_visible_is_capped() {
        let mut facts = FactsState::new();
        facts.set_facts((0..6).map(|i| format!("fact {}", i)).collect());
        assert!(facts.is_loaded());
        assert_eq!(facts.visible().len(), MAX_VISIBLE_FACTS);
        assert_eq!(facts.visible()[0], "fact 0");
    }

    #[test]
    fn test_visible_with_fewer_facts() {
        let mut facts = FactsState::new();
        facts.set_facts(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(facts.visible().len(), 2);
    }
}
