//! Result synthesis: summary template and rule-based recommendations.

use crate::models::{ResearchQuery, Resource};

/// How many titles the summary names per source
const TOP_TITLES: usize = 3;

/// A repository above this relevance gets recommended by name
const STRONG_MATCH_THRESHOLD: f64 = 0.8;

const TESTING_CLOSER: &str = "Set up automated testing and CI before adopting the technology";
const UPDATE_CLOSER: &str = "Establish a regular dependency-update cadence for the new stack";

/// Build a deterministic natural-language summary of the aggregated results.
pub fn summarize(
    query: &ResearchQuery,
    repo_resources: &[Resource],
    doc_resources: &[Resource],
) -> String {
    let mut summary = format!(
        "Found {} repositories and {} documentation resources for {}.",
        repo_resources.len(),
        doc_resources.len(),
        query.technology
    );

    if !repo_resources.is_empty() {
        summary.push_str(&format!(
            " Top repositories: {}.",
            titles(repo_resources)
        ));
    }
    if !doc_resources.is_empty() {
        summary.push_str(&format!(
            " Key documentation: {}.",
            titles(doc_resources)
        ));
    }
    if !query.purpose.is_empty() {
        summary.push_str(&format!(
            " These resources align with your goal of {}.",
            query.purpose
        ));
    }

    summary
}

fn titles(resources: &[Resource]) -> String {
    resources
        .iter()
        .take(TOP_TITLES)
        .map(|r| r.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the rule-ordered recommendation list.
///
/// Rules fire in a fixed order: strong repository match by name, purpose
/// keywords, per-constraint keywords, then the two fixed closers. The output
/// order is the order rules fire, not a score ranking.
pub fn recommend(query: &ResearchQuery, repo_resources: &[Resource]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(strong) = repo_resources
        .iter()
        .find(|r| r.relevance > STRONG_MATCH_THRESHOLD)
    {
        recommendations.push(format!(
            "Start with {}, the closest high-relevance repository match",
            strong.title
        ));
    }

    let purpose = query.purpose.to_lowercase();
    if purpose.contains("web") {
        recommendations.push(
            "Review the maintenance status and release cadence of candidate web frameworks"
                .to_string(),
        );
    }
    if purpose.contains("api") {
        recommendations.push(
            "Evaluate API client libraries and integration patterns before committing".to_string(),
        );
    }

    for constraint in &query.constraints {
        let constraint = constraint.to_lowercase();
        if constraint.contains("performance") {
            recommendations.push(
                "Benchmark the shortlisted options under a representative workload".to_string(),
            );
        }
        if constraint.contains("security") {
            recommendations
                .push("Schedule a security review of the chosen dependencies".to_string());
        }
    }

    recommendations.push(TESTING_CLOSER.to_string());
    recommendations.push(UPDATE_CLOSER.to_string());

    recommendations
}
