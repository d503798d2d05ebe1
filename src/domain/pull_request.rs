/// A pull request as reported by the hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
    /// Merge timestamp; `None` for open or closed-unmerged requests
    pub merged_at: Option<String>,
    pub merge_commit_sha: Option<String>,
}

impl PullRequest {
    /// Create an unmerged pull request with no labels
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        PullRequest {
            number,
            title: title.into(),
            labels: Vec::new(),
            merged_at: None,
            merge_commit_sha: None,
        }
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn merged(mut self, merged_at: impl Into<String>, sha: impl Into<String>) -> Self {
        self.merged_at = Some(merged_at.into());
        self.merge_commit_sha = Some(sha.into());
        self
    }

    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// True if this pull request carries any of `labels`
    pub fn has_any_label(&self, labels: &[String]) -> bool {
        labels.iter().any(|label| self.labels.contains(label))
    }
}
