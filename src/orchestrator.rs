//! Research orchestration: concurrent fan-out over the source adapters and
//! assembly of the final result.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, DedupPolicy};
use crate::models::{ResearchQuery, ResearchResult, Resource};
use crate::sources::{
    CodeSearchSource, DocsSource, ExampleSource, RepoSearchSource, ResourceSource, SourceError,
};
use crate::synthesis;

/// The single error kind a research operation can surface.
///
/// Adapter failures never reach the caller; this covers only errors that
/// escape adapter-level recovery, plus deadline expiry and rejected input.
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    #[error("research operation failed: {0}")]
    Failed(String),
}

impl From<SourceError> for ResearchError {
    fn from(err: SourceError) -> Self {
        ResearchError::Failed(err.to_string())
    }
}

/// Drives one research operation: fan-out to the three adapters, fan-in,
/// synthesis, and result assembly.
#[derive(Debug, Clone)]
pub struct ResearchOrchestrator {
    repositories: Arc<dyn ResourceSource>,
    documentation: Arc<dyn ResourceSource>,
    code: Arc<dyn ExampleSource>,
    dedup: DedupPolicy,
    deadline: Option<Duration>,
}

impl ResearchOrchestrator {
    /// Wire the real adapters from configuration
    pub fn from_config(config: &Config) -> Result<Self, ResearchError> {
        Ok(Self::new(
            Arc::new(RepoSearchSource::new(config.github.clone())?),
            Arc::new(DocsSource::new(config.docs.clone())?),
            Arc::new(CodeSearchSource::new(config.github.clone())?),
            config.dedup,
            config.deadline(),
        ))
    }

    /// Assemble an orchestrator from injected sources
    pub fn new(
        repositories: Arc<dyn ResourceSource>,
        documentation: Arc<dyn ResourceSource>,
        code: Arc<dyn ExampleSource>,
        dedup: DedupPolicy,
        deadline: Option<Duration>,
    ) -> Self {
        Self {
            repositories,
            documentation,
            code,
            dedup,
            deadline,
        }
    }

    /// Run one research operation.
    ///
    /// Returns a best-effort result built from whichever sources succeeded;
    /// a channel that failed entirely simply contributes nothing. Only
    /// deadline expiry or a failure outside the adapters' own recovery
    /// surfaces as an error.
    pub async fn research_topic(
        &self,
        query: &ResearchQuery,
    ) -> Result<ResearchResult, ResearchError> {
        if query.technology.trim().is_empty() {
            return Err(ResearchError::Failed("empty technology term".to_string()));
        }

        tracing::info!(technology = %query.technology, "starting research");

        let fan_out = async {
            tokio::join!(
                self.repositories.search(&query.technology),
                self.documentation.search(&query.technology),
                self.code.search(&query.technology),
            )
        };

        let (repo_resources, doc_resources, code_examples) = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, fan_out)
                .await
                .map_err(|_| ResearchError::Failed("deadline exceeded".to_string()))?,
            None => fan_out.await,
        };

        tracing::debug!(
            repositories = repo_resources.len(),
            documentation = doc_resources.len(),
            examples = code_examples.len(),
            "sources collected"
        );

        let summary = synthesis::summarize(query, &repo_resources, &doc_resources);
        let recommendations = synthesis::recommend(query, &repo_resources);

        let mut resources = repo_resources;
        resources.extend(doc_resources);
        if self.dedup == DedupPolicy::ByUrl {
            resources = dedup_by_url(resources);
        }

        Ok(ResearchResult {
            summary,
            recommendations,
            code_examples,
            resources,
        })
    }
}

/// Drop later entries whose URL was already seen, preserving order
fn dedup_by_url(resources: Vec<Resource>) -> Vec<Resource> {
    let mut seen = HashSet::new();
    resources
        .into_iter()
        .filter(|r| seen.insert(r.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceKind;
    use crate::sources::mock::{MockExampleSource, MockResourceSource};
    use async_trait::async_trait;

    fn resource(title: &str, url: &str, kind: ResourceKind, relevance: f64) -> Resource {
        Resource::new(title, url, kind, relevance)
    }

    fn orchestrator_with(
        repos: Vec<Resource>,
        docs: Vec<Resource>,
        dedup: DedupPolicy,
    ) -> ResearchOrchestrator {
        ResearchOrchestrator::new(
            Arc::new(MockResourceSource::new("repos", repos)),
            Arc::new(MockResourceSource::new("docs", docs)),
            Arc::new(MockExampleSource::new(Vec::new())),
            dedup,
            None,
        )
    }

    #[tokio::test]
    async fn test_resources_concatenated_in_source_order() {
        let repos = vec![resource(
            "facebook/react",
            "https://github.com/facebook/react",
            ResourceKind::Repository,
            0.9,
        )];
        let docs = vec![resource(
            "React reference",
            "https://example.com/react",
            ResourceKind::Documentation,
            0.8,
        )];

        let orchestrator = orchestrator_with(repos, docs, DedupPolicy::KeepAll);
        let result = orchestrator
            .research_topic(&ResearchQuery::new("react"))
            .await
            .unwrap();

        assert_eq!(result.resources.len(), 2);
        assert_eq!(result.resources[0].kind, ResourceKind::Repository);
        assert_eq!(result.resources[1].kind, ResourceKind::Documentation);
    }

    #[tokio::test]
    async fn test_keep_all_preserves_cross_source_duplicates() {
        let duplicate = "https://example.com/same";
        let repos = vec![resource("from repos", duplicate, ResourceKind::Repository, 0.5)];
        let docs = vec![resource("from docs", duplicate, ResourceKind::Documentation, 0.5)];

        let keep_all = orchestrator_with(repos.clone(), docs.clone(), DedupPolicy::KeepAll);
        let result = keep_all
            .research_topic(&ResearchQuery::new("react"))
            .await
            .unwrap();
        assert_eq!(result.resources.len(), 2);

        let by_url = orchestrator_with(repos, docs, DedupPolicy::ByUrl);
        let result = by_url
            .research_topic(&ResearchQuery::new("react"))
            .await
            .unwrap();
        assert_eq!(result.resources.len(), 1);
        assert_eq!(result.resources[0].title, "from repos");
    }

    #[tokio::test]
    async fn test_empty_technology_rejected() {
        let orchestrator = orchestrator_with(Vec::new(), Vec::new(), DedupPolicy::KeepAll);
        let err = orchestrator
            .research_topic(&ResearchQuery::new("   "))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("research operation failed"));
    }

    #[derive(Debug)]
    struct StalledSource;

    #[async_trait]
    impl ResourceSource for StalledSource {
        fn id(&self) -> &str {
            "stalled"
        }

        async fn search(&self, _technology: &str) -> Vec<Resource> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Vec::new()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_expiry_is_generic_failure() {
        let orchestrator = ResearchOrchestrator::new(
            Arc::new(StalledSource),
            Arc::new(MockResourceSource::new("docs", Vec::new())),
            Arc::new(MockExampleSource::new(Vec::new())),
            DedupPolicy::KeepAll,
            Some(Duration::from_secs(1)),
        );

        let err = orchestrator
            .research_topic(&ResearchQuery::new("react"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "research operation failed: deadline exceeded");
    }
}
