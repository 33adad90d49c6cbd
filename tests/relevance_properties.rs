//! Property tests for the relevance scoring heuristics.

use proptest::prelude::*;

use tech_scout::relevance::{repository_relevance, text_relevance};

proptest! {
    #[test]
    fn repository_score_stays_in_unit_interval(
        name in ".{0,80}",
        description in ".{0,200}",
        stars in 0u64..=u64::MAX / 2,
        technology in ".{0,40}",
    ) {
        let score = repository_relevance(&name, &description, stars, &technology);
        prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
    }

    #[test]
    fn text_score_stays_in_unit_interval(
        text in ".{0,200}",
        technology in ".{0,40}",
    ) {
        let score = text_relevance(&text, &technology);
        prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
    }

    #[test]
    fn extreme_star_counts_cap_at_point_three(
        stars in 3_000u64..=u64::MAX / 2,
    ) {
        // no name or description signal: the star bonus alone caps at 0.3
        let score = repository_relevance("aaaa", "bbbb", stars, "zzzz");
        prop_assert!(score <= 0.3 + f64::EPSILON);
    }

    #[test]
    fn exact_substring_always_scores_point_eight(
        prefix in "[a-z ]{0,30}",
        suffix in "[a-z ]{0,30}",
        technology in "[a-z]{1,15}",
    ) {
        let text = format!("{}{}{}", prefix, technology, suffix);
        prop_assert_eq!(text_relevance(&text, &technology), 0.8);
    }

    #[test]
    fn partial_matches_never_outrank_exact(
        text in "[a-z ]{0,100}",
        technology in "[a-z]{1,10}( [a-z]{1,10}){0,3}",
    ) {
        let score = text_relevance(&text, &technology);
        prop_assert!(score == 0.8 || score <= 0.6 + f64::EPSILON);
    }
}
