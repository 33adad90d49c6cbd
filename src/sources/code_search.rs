//! Code-search source adapter.
//!
//! One query against the GitHub code-search API (page size 5, most recently
//! indexed first), then a follow-up fetch of each matched file's raw content.
//! A context window around the first line mentioning the technology term
//! becomes the example body; files with no matching line contribute their
//! first 20 lines instead.

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::models::CodeExample;
use crate::sources::{ExampleSource, SourceError};
use crate::utils::HttpClient;

const PAGE_SIZE: usize = 5;
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Lines kept on each side of the first matching line
const CONTEXT_LINES: usize = 3;

/// Fallback length when no line matches the term
const FALLBACK_LINES: usize = 20;

/// Code-search source
#[derive(Debug, Clone)]
pub struct CodeSearchSource {
    client: HttpClient,
    config: GithubConfig,
}

impl CodeSearchSource {
    pub fn new(config: GithubConfig) -> Result<Self, SourceError> {
        Ok(Self {
            client: HttpClient::new().map_err(SourceError::from)?,
            config,
        })
    }

    fn authed(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url).header("Accept", ACCEPT_HEADER);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn try_search(&self, technology: &str) -> Result<Vec<CodeExample>, SourceError> {
        let query = format!("{} language:javascript language:typescript", technology);
        let url = format!(
            "{}/search/code?q={}&sort=indexed&per_page={}",
            self.config.api_base,
            urlencoding::encode(&query),
            PAGE_SIZE
        );

        let response = self.authed(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "code search returned status {}",
                response.status()
            )));
        }

        let data: CodeSearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("code search JSON: {}", e)))?;

        let mut examples = Vec::new();
        for item in data.items {
            match self.fetch_example(&item, technology).await {
                Ok(example) => examples.push(example),
                Err(err) => {
                    tracing::warn!(file = %item.name, %err, "skipping code example");
                }
            }
        }

        Ok(examples)
    }

    /// Fetch one matched file's content and turn it into an example
    async fn fetch_example(
        &self,
        item: &CodeItem,
        technology: &str,
    ) -> Result<CodeExample, SourceError> {
        let response = self.authed(&item.url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "file fetch returned status {}",
                response.status()
            )));
        }

        let content: FileContent = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("file content JSON: {}", e)))?;
        let code = content.decode()?;

        Ok(CodeExample {
            language: language_for(&item.name),
            code: extract_relevant_code(&code, technology),
            description: format!("Code example from {}", item.repository.full_name),
            source: item.html_url.clone(),
        })
    }
}

#[async_trait]
impl ExampleSource for CodeSearchSource {
    fn id(&self) -> &str {
        "code_search"
    }

    async fn search(&self, technology: &str) -> Vec<CodeExample> {
        match self.try_search(technology).await {
            Ok(examples) => {
                tracing::debug!(count = examples.len(), technology, "code search complete");
                examples
            }
            Err(err) => {
                tracing::warn!(%err, technology, "code search failed");
                Vec::new()
            }
        }
    }
}

/// Extract the context window around the first line containing the term.
///
/// The window spans `[i - 3, i + 3]` clamped to the file bounds; scanning
/// stops at the first match. Files with no matching line fall back to their
/// first 20 lines verbatim.
pub fn extract_relevant_code(code: &str, technology: &str) -> String {
    let term = technology.to_lowercase();
    let lines: Vec<&str> = code.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if line.to_lowercase().contains(&term) {
            let start = i.saturating_sub(CONTEXT_LINES);
            let end = (i + CONTEXT_LINES + 1).min(lines.len());
            return lines[start..end].join("\n");
        }
    }

    lines
        .iter()
        .take(FALLBACK_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display language for a file name, derived from its extension
pub fn language_for(file_name: &str) -> String {
    let extension = file_name.rsplit('.').next().unwrap_or("");
    let language = match extension.to_lowercase().as_str() {
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascript",
        "ts" | "mts" => "typescript",
        "tsx" => "typescript",
        "py" => "python",
        "rs" => "rust",
        "go" => "go",
        "java" => "java",
        "rb" => "ruby",
        "php" => "php",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "cs" => "csharp",
        "swift" => "swift",
        "kt" => "kotlin",
        "vue" => "vue",
        "svelte" => "svelte",
        "html" => "html",
        "css" | "scss" => "css",
        "json" => "json",
        "yml" | "yaml" => "yaml",
        "sh" => "shell",
        "sql" => "sql",
        "md" => "markdown",
        _ => "text",
    };
    language.to_string()
}

// ===== Code search API types =====

#[derive(Debug, Deserialize)]
struct CodeSearchResponse {
    items: Vec<CodeItem>,
}

#[derive(Debug, Deserialize)]
struct CodeItem {
    name: String,
    url: String,
    html_url: String,
    repository: CodeRepo,
}

#[derive(Debug, Deserialize)]
struct CodeRepo {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct FileContent {
    content: String,
    #[serde(default)]
    encoding: Option<String>,
}

impl FileContent {
    /// Decode the transport encoding. The contents endpoint wraps base64
    /// bodies across lines, so whitespace is stripped before decoding.
    fn decode(&self) -> Result<String, SourceError> {
        match self.encoding.as_deref() {
            Some("base64") | None => {
                let packed: String = self
                    .content
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(packed)
                    .map_err(|e| SourceError::Parse(format!("base64: {}", e)))?;
                String::from_utf8(bytes)
                    .map_err(|e| SourceError::Parse(format!("UTF-8: {}", e)))
            }
            Some(other) => Err(SourceError::Parse(format!(
                "unsupported content encoding: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_window_around_match() {
        let code = (0..12)
            .map(|i| {
                if i == 6 {
                    "const app = new React();".to_string()
                } else {
                    format!("line {}", i)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let snippet = extract_relevant_code(&code, "react");
        let lines: Vec<&str> = snippet.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "line 3");
        assert_eq!(lines[3], "const app = new React();");
        assert_eq!(lines[6], "line 9");
    }

    #[test]
    fn test_extract_window_clamped_at_start() {
        let code = "import React from 'react';\nline 1\nline 2\nline 3\nline 4";
        let snippet = extract_relevant_code(code, "react");
        // match at line 0: window is [0, 3]
        assert_eq!(snippet.lines().count(), 4);
    }

    #[test]
    fn test_extract_fallback_first_twenty() {
        let code = (0..30)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let snippet = extract_relevant_code(&code, "react");
        assert_eq!(snippet.lines().count(), 20);
        assert!(snippet.starts_with("line 0"));
        assert!(snippet.ends_with("line 19"));
    }

    #[test]
    fn test_extract_stops_at_first_match() {
        let code = "before\nuses react here\nmiddle\nreact again\nafter";
        let snippet = extract_relevant_code(code, "react");
        // window centered on the first match only
        assert!(snippet.starts_with("before"));
        assert!(snippet.contains("react again")); // within +3 of the first match
        assert_eq!(snippet.lines().count(), 5);
    }

    #[test]
    fn test_language_lookup() {
        assert_eq!(language_for("app.tsx"), "typescript");
        assert_eq!(language_for("main.rs"), "rust");
        assert_eq!(language_for("index.svelte"), "svelte");
        assert_eq!(language_for("Makefile"), "text");
        assert_eq!(language_for("weird.xyz"), "text");
    }

    #[test]
    fn test_decode_wrapped_base64() {
        let content = FileContent {
            // "hello\nworld" split across lines the way the API returns it
            content: "aGVsbG8K\nd29ybGQ=\n".to_string(),
            encoding: Some("base64".to_string()),
        };
        assert_eq!(content.decode().unwrap(), "hello\nworld");
    }

    #[test]
    fn test_decode_rejects_unknown_encoding() {
        let content = FileContent {
            content: "whatever".to_string(),
            encoding: Some("rot13".to_string()),
        };
        assert!(content.decode().is_err());
    }
}
