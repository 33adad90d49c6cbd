//! Repository-search source adapter.
//!
//! One query against the GitHub repository-search API, sorted by stars
//! descending, page size 10. Results are mapped to [`Resource`] entries
//! scored by [`repository_relevance`].

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::models::{Resource, ResourceKind};
use crate::relevance::repository_relevance;
use crate::sources::{ResourceSource, SourceError};
use crate::utils::HttpClient;

const PAGE_SIZE: usize = 10;
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Repository-search source
#[derive(Debug, Clone)]
pub struct RepoSearchSource {
    client: HttpClient,
    config: GithubConfig,
}

impl RepoSearchSource {
    pub fn new(config: GithubConfig) -> Result<Self, SourceError> {
        Ok(Self {
            client: HttpClient::new().map_err(SourceError::from)?,
            config,
        })
    }

    async fn try_search(&self, technology: &str) -> Result<Vec<Resource>, SourceError> {
        let query = format!(
            "{} language:javascript language:typescript stars:>100",
            technology
        );
        let url = format!(
            "{}/search/repositories?q={}&sort=stars&order=desc&per_page={}",
            self.config.api_base,
            urlencoding::encode(&query),
            PAGE_SIZE
        );

        let mut request = self.client.get(&url).header("Accept", ACCEPT_HEADER);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "repository search returned status {}",
                response.status()
            )));
        }

        let data: RepoSearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("repository search JSON: {}", e)))?;

        let resources = data
            .items
            .into_iter()
            .map(|item| {
                let relevance = repository_relevance(
                    &item.name,
                    item.description.as_deref().unwrap_or(""),
                    item.stargazers_count,
                    technology,
                );
                Resource::new(item.full_name, item.html_url, ResourceKind::Repository, relevance)
            })
            .collect();

        Ok(resources)
    }
}

#[async_trait]
impl ResourceSource for RepoSearchSource {
    fn id(&self) -> &str {
        "github_repos"
    }

    async fn search(&self, technology: &str) -> Vec<Resource> {
        match self.try_search(technology).await {
            Ok(resources) => {
                tracing::debug!(
                    count = resources.len(),
                    technology,
                    "repository search complete"
                );
                resources
            }
            Err(err) => {
                tracing::warn!(%err, technology, "repository search failed");
                Vec::new()
            }
        }
    }
}

// ===== Repository search API types =====

#[derive(Debug, Deserialize)]
struct RepoSearchResponse {
    items: Vec<RepoItem>,
}

#[derive(Debug, Deserialize)]
struct RepoItem {
    name: String,
    full_name: String,
    html_url: String,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    description: Option<String>,
}
