//! Research query and result models.

use serde::{Deserialize, Serialize};

/// The kind of resource a source adapter produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Documentation,
    Tutorial,
    Repository,
    Article,
}

impl ResourceKind {
    /// Returns the display name of the resource kind
    pub fn name(&self) -> &str {
        match self {
            ResourceKind::Documentation => "documentation",
            ResourceKind::Tutorial => "tutorial",
            ResourceKind::Repository => "repository",
            ResourceKind::Article => "article",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A research query: the technology to investigate, the caller's stated
/// purpose, and any constraints. Immutable input to one orchestration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchQuery {
    /// Technology term under investigation (e.g. "React")
    pub technology: String,

    /// What the caller wants to build with it
    pub purpose: String,

    /// Ordered constraints (e.g. "performance", "security")
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl ResearchQuery {
    /// Create a query with no purpose or constraints
    pub fn new(technology: impl Into<String>) -> Self {
        Self {
            technology: technology.into(),
            purpose: String::new(),
            constraints: Vec::new(),
        }
    }

    /// Set the purpose
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Add a constraint
    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }
}

/// A single ranked resource from one external source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Human-readable title
    pub title: String,

    /// Resource URL (always absolute)
    pub url: String,

    /// What kind of resource this is
    pub kind: ResourceKind,

    /// Relevance score in [0, 1]
    pub relevance: f64,
}

impl Resource {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        kind: ResourceKind,
        relevance: f64,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind,
            relevance,
        }
    }
}

/// A representative code snippet extracted from a source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeExample {
    /// Display language tag derived from the file extension
    pub language: String,

    /// The extracted snippet
    pub code: String,

    /// Short description of where the snippet came from
    pub description: String,

    /// Origin URL of the file
    pub source: String,
}

/// The composed result of one research operation.
///
/// Built once per query and never mutated after return. `resources` is the
/// concatenation of repository- and documentation-sourced entries; the same
/// URL may appear from two sources unless a dedup policy is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    /// Natural-language summary of what was found
    pub summary: String,

    /// Rule-ordered recommendations
    pub recommendations: Vec<String>,

    /// Extracted code snippets
    pub code_examples: Vec<CodeExample>,

    /// Repository and documentation resources, in source order
    pub resources: Vec<Resource>,
}
