use crate::domain::PullRequest;
use crate::error::{DrafterError, Result};
use crate::hosting::PullRequestSource;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// Canned commit-to-pull-request answers for tests
#[derive(Debug, Default)]
pub struct MockPullRequestSource {
    pulls: HashMap<String, Vec<PullRequest>>,
    failing: HashSet<String>,
}

impl MockPullRequestSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `pull` with `sha`; may be called repeatedly for one commit
    pub fn add(&mut self, sha: impl Into<String>, pull: PullRequest) {
        self.pulls.entry(sha.into()).or_default().push(pull);
    }

    /// Make lookups for `sha` fail
    pub fn fail_on(&mut self, sha: impl Into<String>) {
        self.failing.insert(sha.into());
    }
}

#[async_trait]
impl PullRequestSource for MockPullRequestSource {
    async fn pull_requests_for_commit(&self, sha: &str) -> Result<Vec<PullRequest>> {
        if self.failing.contains(sha) {
            return Err(DrafterError::hosting(format!("503 - lookup for {} failed", sha)));
        }
        Ok(self.pulls.get(sha).cloned().unwrap_or_default())
    }
}
