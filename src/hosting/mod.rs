//! Hosting service lookups: which pull requests a commit belongs to
//!
//! - [github::GitHubClient]: the GitHub REST implementation
//! - [mock::MockPullRequestSource]: a canned implementation for tests
//!
//! [RepoContext] collects the owner, repository name and token the real client
//! needs. Missing pieces are reported as a [BoundaryWarning] rather than an error
//! so the caller can carry on with an empty pull request set.

pub mod github;
pub mod mock;

pub use github::GitHubClient;
pub use mock::MockPullRequestSource;

use crate::boundary::BoundaryWarning;
use crate::domain::PullRequest;
use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Resolves a commit to the pull requests associated with it
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Pull requests associated with `sha`, merged or not
    async fn pull_requests_for_commit(&self, sha: &str) -> Result<Vec<PullRequest>>;
}

/// Repository coordinates and credential for hosting API calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    pub owner: String,
    pub name: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    repository: Option<EventRepository>,
}

#[derive(Debug, Deserialize)]
struct EventRepository {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    owner: Option<EventOwner>,
}

#[derive(Debug, Deserialize)]
struct EventOwner {
    #[serde(default)]
    login: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RepoContext {
    /// Build the context from a webhook event payload file and a token.
    ///
    /// # Arguments
    /// * `event_path` - Path to the JSON event payload (`GITHUB_EVENT_PATH`)
    /// * `token` - Bearer token (`GITHUB_TOKEN`)
    ///
    /// # Returns
    /// * `Ok(RepoContext)` - Everything needed for API calls is present
    /// * `Err(BoundaryWarning)` - Why the lookup has to be skipped
    pub fn resolve(
        event_path: Option<&Path>,
        token: Option<&str>,
    ) -> std::result::Result<Self, BoundaryWarning> {
        let path = match event_path {
            Some(path) if path.is_file() => path,
            other => {
                return Err(BoundaryWarning::MissingEventPayload {
                    path: other.map(|p| p.display().to_string()),
                })
            }
        };

        let unreadable = |reason: String| BoundaryWarning::UnreadableEventPayload {
            path: path.display().to_string(),
            reason,
        };
        let text = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        let event: EventPayload =
            serde_json::from_str(&text).map_err(|e| unreadable(e.to_string()))?;

        let repository = event.repository;
        let owner = non_empty(
            repository
                .as_ref()
                .and_then(|r| r.owner.as_ref())
                .and_then(|o| o.login.clone()),
        );
        let name = non_empty(repository.and_then(|r| r.name));
        let token = non_empty(token.map(str::to_string));

        match (owner, name, token) {
            (Some(owner), Some(name), Some(token)) => Ok(RepoContext { owner, name, token }),
            (owner, name, token) => {
                let mut missing = Vec::new();
                if owner.is_none() {
                    missing.push("owner");
                }
                if name.is_none() {
                    missing.push("repository name");
                }
                if token.is_none() {
                    missing.push("token");
                }
                Err(BoundaryWarning::MissingRepositoryContext { missing })
            }
        }
    }
}
