//! Repository structure analyzer.
//!
//! Shallow-clones a repository into a uniquely timestamped temporary
//! directory, then reports placeholder findings. The inspection itself is not
//! implemented; the returned structure, technologies, and patterns are fixed
//! constants independent of the cloned contents.

use std::path::PathBuf;

/// Errors raised while preparing a repository for analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("failed to run git: {0}")]
    Git(#[from] std::io::Error),

    #[error("clone failed for {url}: {stderr}")]
    CloneFailed { url: String, stderr: String },
}

/// Findings for one repository
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RepoStructure {
    /// Top-level layout entries
    pub structure: Vec<String>,

    /// Detected technologies
    pub technologies: Vec<String>,

    /// Detected architectural patterns
    pub patterns: Vec<String>,
}

/// Clone-and-inspect analyzer (inspection currently stubbed)
#[derive(Debug, Clone)]
pub struct RepoStructureAnalyzer {
    clone_root: PathBuf,
}

impl RepoStructureAnalyzer {
    /// Analyzer cloning under the system temp directory
    pub fn new() -> Self {
        Self {
            clone_root: std::env::temp_dir(),
        }
    }

    /// Analyzer cloning under a specific directory
    pub fn with_clone_root(clone_root: PathBuf) -> Self {
        Self { clone_root }
    }

    /// Unique destination for one clone
    fn clone_destination(&self) -> PathBuf {
        self.clone_root
            .join(format!("tech-scout-clone-{}", chrono::Utc::now().timestamp_millis()))
    }

    /// Shallow-clone the repository, then report placeholder findings.
    pub async fn analyze(&self, repo_url: &str) -> Result<RepoStructure, AnalyzeError> {
        let destination = self.clone_destination();

        tracing::debug!(repo_url, dest = %destination.display(), "cloning repository");
        let output = tokio::process::Command::new("git")
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg(repo_url)
            .arg(&destination)
            .output()
            .await?;

        if !output.status.success() {
            return Err(AnalyzeError::CloneFailed {
                url: repo_url.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        // TODO: walk the clone and detect the real layout; until then the
        // findings below are constants.
        Ok(RepoStructure {
            structure: vec![
                "src/".to_string(),
                "tests/".to_string(),
                "package.json".to_string(),
            ],
            technologies: vec!["javascript".to_string(), "nodejs".to_string()],
            patterns: vec!["mvc".to_string(), "component-based".to_string()],
        })
    }
}

impl Default for RepoStructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_destinations_are_unique_per_call() {
        let analyzer = RepoStructureAnalyzer::new();
        let a = analyzer.clone_destination();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = analyzer.clone_destination();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_clone_failure_surfaces() {
        let analyzer = RepoStructureAnalyzer::new();
        let err = analyzer
            .analyze("file:///nonexistent/repo.git")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::CloneFailed { .. } | AnalyzeError::Git(_)));
    }
}
