//! Core data models for research queries and aggregated results.

mod research;

pub use research::{CodeExample, ResearchQuery, ResearchResult, Resource, ResourceKind};
