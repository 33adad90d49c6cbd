//! # tech-scout
//!
//! A multi-source technology research aggregation engine. Given a technology
//! name, a stated purpose, and optional constraints, it concurrently queries
//! heterogeneous external sources, scores and filters results for relevance,
//! extracts representative code context, and synthesizes a structured result.
//!
//! ## Architecture
//!
//! - [`models`]: Core data structures (ResearchQuery, Resource, ResearchResult)
//! - [`relevance`]: Pure relevance scoring heuristics
//! - [`sources`]: Source adapters with per-adapter failure isolation
//! - [`orchestrator`]: Concurrent fan-out/fan-in and result assembly
//! - [`synthesis`]: Summary and recommendation generation
//! - [`analyzer`]: Repository structure analyzer (stubbed inspection)
//! - [`config`]: Configuration management
//! - [`utils`]: HTTP client and other shared utilities

pub mod analyzer;
pub mod config;
pub mod models;
pub mod orchestrator;
pub mod relevance;
pub mod sources;
pub mod synthesis;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use models::{CodeExample, ResearchQuery, ResearchResult, Resource, ResourceKind};
pub use orchestrator::{ResearchError, ResearchOrchestrator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
