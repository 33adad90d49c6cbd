//! Configuration management.
//!
//! Every adapter endpoint and policy knob flows from [`Config`] so components
//! are wired by explicit injection rather than process-wide singletons, and
//! tests can point adapters at local fixture servers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// User agent sent to the documentation sites
pub const DOCS_USER_AGENT: &str = "TechScout-Research-Bot/1.0";

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repository/code search API settings
    #[serde(default)]
    pub github: GithubConfig,

    /// Documentation-site crawl settings
    #[serde(default)]
    pub docs: DocsConfig,

    /// How to treat the same URL arriving from two sources
    #[serde(default)]
    pub dedup: DedupPolicy,

    /// Optional deadline for one whole research operation, in seconds.
    /// `None` leaves the fan-out unbounded beyond per-site timeouts.
    #[serde(default)]
    pub deadline_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            docs: DocsConfig::default(),
            dedup: DedupPolicy::default(),
            deadline_secs: None,
        }
    }
}

impl Config {
    /// Operation-level deadline, if configured
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_secs.map(Duration::from_secs)
    }
}

/// Settings for the repository- and code-search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API base URL (overridable for tests)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Bearer token for authenticated requests
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: std::env::var("GITHUB_TOKEN").ok(),
        }
    }
}

fn default_api_base() -> String {
    GITHUB_API_BASE.to_string()
}

/// One documentation search site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocSite {
    /// Short name used in logs
    pub name: String,

    /// Search URL prefix; the encoded technology term is appended
    pub search_url: String,
}

impl DocSite {
    pub fn new(name: impl Into<String>, search_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_url: search_url.into(),
        }
    }
}

/// Whether the documentation sites are crawled one at a time or together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocsFetchPolicy {
    #[default]
    Sequential,
    Concurrent,
}

/// Documentation adapter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Ordered list of sites to crawl
    #[serde(default = "default_sites")]
    pub sites: Vec<DocSite>,

    /// Independent timeout applied to each site fetch, in seconds
    #[serde(default = "default_site_timeout")]
    pub per_site_timeout_secs: u64,

    /// Crawl ordering policy
    #[serde(default)]
    pub fetch_policy: DocsFetchPolicy,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            sites: default_sites(),
            per_site_timeout_secs: default_site_timeout(),
            fetch_policy: DocsFetchPolicy::default(),
        }
    }
}

impl DocsConfig {
    pub fn per_site_timeout(&self) -> Duration {
        Duration::from_secs(self.per_site_timeout_secs)
    }
}

fn default_sites() -> Vec<DocSite> {
    vec![
        DocSite::new("mdn", "https://developer.mozilla.org/en-US/search?q="),
        DocSite::new("stackoverflow", "https://stackoverflow.com/search?q="),
        DocSite::new("npm", "https://www.npmjs.com/search?q="),
    ]
}

fn default_site_timeout() -> u64 {
    5
}

/// Policy for resources arriving from two sources with the same URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Keep every entry, preserving provenance
    #[default]
    KeepAll,
    /// Drop later entries whose URL was already seen
    ByUrl,
}
