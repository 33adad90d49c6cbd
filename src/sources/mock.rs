//! Mock sources for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::{CodeExample, Resource};
use crate::sources::{ExampleSource, ResourceSource};

/// A mock resource source that returns a predefined list.
#[derive(Debug, Default)]
pub struct MockResourceSource {
    id: String,
    resources: Mutex<Vec<Resource>>,
}

impl MockResourceSource {
    /// Create a mock with a fixed id and response.
    pub fn new(id: impl Into<String>, resources: Vec<Resource>) -> Self {
        Self {
            id: id.into(),
            resources: Mutex::new(resources),
        }
    }

    /// Replace the configured response.
    pub fn set_resources(&self, resources: Vec<Resource>) {
        *self.resources.lock().unwrap() = resources;
    }
}

#[async_trait]
impl ResourceSource for MockResourceSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn search(&self, _technology: &str) -> Vec<Resource> {
        self.resources.lock().unwrap().clone()
    }
}

/// A mock example source that returns a predefined list.
#[derive(Debug, Default)]
pub struct MockExampleSource {
    examples: Mutex<Vec<CodeExample>>,
}

impl MockExampleSource {
    pub fn new(examples: Vec<CodeExample>) -> Self {
        Self {
            examples: Mutex::new(examples),
        }
    }
}

#[async_trait]
impl ExampleSource for MockExampleSource {
    fn id(&self) -> &str {
        "mock"
    }

    async fn search(&self, _technology: &str) -> Vec<CodeExample> {
        self.examples.lock().unwrap().clone()
    }
}
