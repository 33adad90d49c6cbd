//! Relevance scoring heuristics.
//!
//! Pure, deterministic functions shared by the source adapters. All scores
//! land in [0, 1].

/// Score a repository against a technology term.
///
/// Name match is the strongest popularity-independent signal (+0.4),
/// description match is secondary (+0.3), and the star count contributes a
/// bounded popularity tiebreaker (`min(stars / 10000, 0.3)`) that cannot
/// dominate the score on its own.
pub fn repository_relevance(
    name: &str,
    description: &str,
    stars: u64,
    technology: &str,
) -> f64 {
    let term = technology.to_lowercase();
    let mut score = 0.0;

    if name.to_lowercase().contains(&term) {
        score += 0.4;
    }
    if description.to_lowercase().contains(&term) {
        score += 0.3;
    }
    score += (stars as f64 / 10_000.0).min(0.3);

    score.clamp(0.0, 1.0)
}

/// Score a text snippet against a technology term.
///
/// A full substring match returns a fixed high-confidence 0.8. Otherwise the
/// term is split on whitespace and the fraction of words found in the text
/// scales a strictly lower 0.6 ceiling, rewarding partial matches without
/// letting them outrank exact ones.
pub fn text_relevance(text: &str, technology: &str) -> f64 {
    let haystack = text.to_lowercase();
    let term = technology.to_lowercase();

    if haystack.contains(&term) {
        return 0.8;
    }

    let words: Vec<&str> = term.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let matched = words.iter().filter(|w| haystack.contains(*w)).count();
    (matched as f64 / words.len() as f64) * 0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_name_and_stars() {
        // 0.4 (name) + 0.0 (description) + 0.3 (capped stars) = 0.7
        let score = repository_relevance("react", "", 200_000, "react");
        assert!((score - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repository_uncapped_stars() {
        // 5000 stars contribute exactly 0.15
        let score = repository_relevance("svelte-kit", "", 5_000, "Svelte");
        assert!((score - 0.55).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repository_all_signals_clamped() {
        let score = repository_relevance(
            "tokio",
            "tokio is an async runtime",
            1_000_000,
            "tokio",
        );
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repository_case_insensitive() {
        let score = repository_relevance("ReactNative", "A React framework", 0, "react");
        assert!((score - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_text_exact_match() {
        assert_eq!(text_relevance("React Tutorial for Beginners", "react"), 0.8);
    }

    #[test]
    fn test_text_partial_match() {
        // one of two words matches: (1/2) * 0.6 = 0.3
        let score = text_relevance("Machine basics", "machine learning");
        assert!((score - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_text_no_match() {
        assert_eq!(text_relevance("Cooking recipes", "rust async"), 0.0);
    }

    #[test]
    fn test_text_empty_term() {
        // an empty term matches any haystack as a substring
        assert_eq!(text_relevance("anything", ""), 0.8);
    }
}
