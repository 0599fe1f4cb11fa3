//! Prompt construction for the insight provider
//!
//! Keeps prompt text out of the HTTP client so the wording can be tuned and
//! tested independently.

/// Build the prompt for a milestone or free-text topic.
pub fn build_insight_prompt(topic: &str) -> String {
    format!(
        "You are the Professor of a Pokémon history archive. In 2-3 short \
         sentences, give an interesting historical insight about: {}. \
         Write plain prose with no markdown or headings.",
        topic
    )
}

/// Build the prompt for the quick-facts panel.
pub fn build_stats_prompt() -> String {
    "List 5 surprising one-sentence facts about the early development of \
     Pokémon. Return exactly one fact per line with no numbering and no \
     markdown."
        .to_string()
}
