//! GitHub REST client for commit-to-pull-request lookups.

use crate::domain::PullRequest;
use crate::error::{DrafterError, Result};
use crate::hosting::{PullRequestSource, RepoContext};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;

pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub API client scoped to one repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    owner: String,
    repo: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct GitHubLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct GitHubPull {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    labels: Vec<GitHubLabel>,
    #[serde(default)]
    merged_at: Option<String>,
    #[serde(default)]
    merge_commit_sha: Option<String>,
}

impl From<GitHubPull> for PullRequest {
    fn from(pull: GitHubPull) -> Self {
        PullRequest {
            number: pull.number,
            title: pull.title.unwrap_or_else(|| "Untitled".to_string()),
            labels: pull.labels.into_iter().map(|label| label.name).collect(),
            merged_at: pull.merged_at,
            merge_commit_sha: pull.merge_commit_sha,
        }
    }
}

impl GitHubClient {
    /// Create a new GitHub client.
    ///
    /// # Arguments
    /// * `context` - Repository coordinates and bearer token
    /// * `api_url` - API base URL, [GITHUB_API_URL] unless on GitHub Enterprise
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(context: &RepoContext, api_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("drafterino/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: context.owner.clone(),
            repo: context.name.clone(),
            token: context.token.clone(),
        })
    }
}

#[async_trait]
impl PullRequestSource for GitHubClient {
    async fn pull_requests_for_commit(&self, sha: &str) -> Result<Vec<PullRequest>> {
        let url = format!(
            "{}/repos/{}/{}/commits/{}/pulls",
            self.api_url, self.owner, self.repo, sha
        );

        let response = self
            .client
            .get(&url)
            .query(&[("per_page", "100")])
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DrafterError::hosting(format!("{} - {}", status, body)));
        }

        let pulls: Vec<GitHubPull> = response.json().await?;
        tracing::debug!(commit = %sha, count = pulls.len(), "fetched associated pull requests");

        Ok(pulls.into_iter().map(PullRequest::from).collect())
    }
}
