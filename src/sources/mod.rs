//! Source adapters for the external information channels.
//!
//! Each adapter queries one channel and returns a uniform result shape. The
//! public `search` methods never fail: every network, parse, or shape error
//! is recovered inside the adapter, logged as a warning, and the affected
//! unit (one resource, one file, one site, or the whole adapter) is omitted
//! from the aggregate. The fallible inner helpers return [`SourceError`] so
//! the failure paths stay testable.

mod code_search;
mod docs;
mod github_repos;

pub mod mock;

pub use code_search::CodeSearchSource;
pub use docs::DocsSource;
pub use github_repos::RepoSearchSource;

use crate::models::{CodeExample, Resource};
use async_trait::async_trait;

/// An adapter that produces ranked [`Resource`] entries for a technology term
#[async_trait]
pub trait ResourceSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (used in logs)
    fn id(&self) -> &str;

    /// Search the channel. Never fails; degraded channels yield fewer
    /// (possibly zero) resources.
    async fn search(&self, technology: &str) -> Vec<Resource>;
}

/// An adapter that produces [`CodeExample`] snippets for a technology term
#[async_trait]
pub trait ExampleSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (used in logs)
    fn id(&self) -> &str;

    /// Search the channel. Never fails; degraded channels yield fewer
    /// (possibly zero) examples.
    async fn search(&self, technology: &str) -> Vec<CodeExample>;
}

/// Errors that can occur inside a source adapter
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (JSON, HTML, base64)
    #[error("Parse error: {0}")]
    Parse(String),

    /// API error from the remote endpoint
    #[error("API error: {0}")]
    Api(String),

    /// Per-request timeout expired
    #[error("Timed out fetching {0}")]
    Timeout(String),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout(err.to_string())
        } else {
            SourceError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}

impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::Parse(format!("URL: {}", err))
    }
}
