pub const SYSTEM_PROMPT: &str = r#"You extract geographic place names from Japanese news headlines about wildlife sightings.

Rules:
- Reply with the single most specific place name the headline mentions (city, town, or prefecture), in the headline's own language.
- Reply with the place name only: no punctuation, no explanation, no quotes.
- If the headline names no geographic place, reply with exactly: none"#;

/// User-message prompt for one headline.
pub fn extraction_prompt(title: &str) -> String {
    format!("Headline: {}\n\nPlace name:", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_the_headline() {
        let prompt = extraction_prompt("札幌で熊が目撃された");
        assert!(prompt.contains("札幌で熊が目撃された"));
    }
}
