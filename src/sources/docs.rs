//! Documentation-site source adapter.
//!
//! Crawls a fixed, ordered list of documentation search pages (general web
//! documentation, a Q&A site, a package registry), harvests anchors whose
//! link target mentions the technology term, and scores the anchor text with
//! [`text_relevance`]. Sites are fetched one at a time by default, each under
//! its own timeout, so one slow site cannot stall the rest beyond its bound.

use async_trait::async_trait;
use futures_util::future::join_all;
use scraper::{Html, Selector};
use url::Url;

use crate::config::{DocSite, DocsConfig, DocsFetchPolicy, DOCS_USER_AGENT};
use crate::models::{Resource, ResourceKind};
use crate::relevance::text_relevance;
use crate::sources::{ResourceSource, SourceError};
use crate::utils::HttpClient;

/// Matches below or at this relevance are discarded
const RELEVANCE_THRESHOLD: f64 = 0.3;

/// At most this many documentation resources are returned
const MAX_RESULTS: usize = 10;

/// Anchor text must be longer than this many characters
const MIN_TITLE_LEN: usize = 10;

/// Documentation-site source
#[derive(Debug, Clone)]
pub struct DocsSource {
    client: HttpClient,
    config: DocsConfig,
}

impl DocsSource {
    pub fn new(config: DocsConfig) -> Result<Self, SourceError> {
        Ok(Self {
            client: HttpClient::with_user_agent(DOCS_USER_AGENT).map_err(SourceError::from)?,
            config,
        })
    }

    /// Fetch one site's search page and harvest matching anchors
    async fn fetch_site(
        &self,
        site: &DocSite,
        technology: &str,
    ) -> Result<Vec<Resource>, SourceError> {
        let page_url = format!("{}{}", site.search_url, urlencoding::encode(technology));

        let response = self
            .client
            .get(&page_url)
            .timeout(self.config.per_site_timeout())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "{} returned status {}",
                site.name,
                response.status()
            )));
        }

        let html = response.text().await?;
        extract_anchors(&html, &page_url, technology)
    }

    async fn site_results(&self, site: &DocSite, technology: &str) -> Vec<Resource> {
        match self.fetch_site(site, technology).await {
            Ok(resources) => {
                tracing::debug!(site = %site.name, count = resources.len(), "site crawled");
                resources
            }
            Err(err) => {
                tracing::warn!(site = %site.name, %err, "documentation site failed");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ResourceSource for DocsSource {
    fn id(&self) -> &str {
        "docs"
    }

    async fn search(&self, technology: &str) -> Vec<Resource> {
        let mut matches = Vec::new();

        match self.config.fetch_policy {
            DocsFetchPolicy::Sequential => {
                for site in &self.config.sites {
                    matches.extend(self.site_results(site, technology).await);
                }
            }
            DocsFetchPolicy::Concurrent => {
                let fetches = self
                    .config
                    .sites
                    .iter()
                    .map(|site| self.site_results(site, technology));
                for resources in join_all(fetches).await {
                    matches.extend(resources);
                }
            }
        }

        rank(matches)
    }
}

/// Parse a search page and emit a resource per qualifying anchor.
///
/// Qualifying anchors have an href containing the lower-cased technology term
/// and trimmed visible text longer than [`MIN_TITLE_LEN`] characters. Relative
/// hrefs are resolved against the page's own URL.
fn extract_anchors(
    html: &str,
    page_url: &str,
    technology: &str,
) -> Result<Vec<Resource>, SourceError> {
    let selector = Selector::parse("a[href]")
        .map_err(|e| SourceError::Parse(format!("selector: {}", e)))?;
    let base = Url::parse(page_url)?;
    let term = technology.to_lowercase();

    let document = Html::parse_document(html);
    let mut resources = Vec::new();

    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.to_lowercase().contains(&term) {
            continue;
        }

        let title = anchor.text().collect::<String>().trim().to_string();
        if title.chars().count() <= MIN_TITLE_LEN {
            continue;
        }

        let Ok(absolute) = base.join(href) else {
            tracing::debug!(href, "skipping unresolvable href");
            continue;
        };

        let relevance = text_relevance(&title, technology);
        resources.push(Resource::new(
            title,
            absolute.to_string(),
            ResourceKind::Documentation,
            relevance,
        ));
    }

    Ok(resources)
}

/// Filter to strictly above the threshold, sort descending, cap the list
fn rank(mut matches: Vec<Resource>) -> Vec<Resource> {
    matches.retain(|r| r.relevance > RELEVANCE_THRESHOLD);
    matches.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(MAX_RESULTS);
    matches
}
