//! Merge history scanning: commits since the previous release to merged pull requests

use crate::boundary::BoundaryWarning;
use crate::domain::{PullRequest, ReleaseTag};
use crate::git::Repository;
use crate::hosting::PullRequestSource;
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;

/// Default number of commit lookups in flight at once
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Collects the merged pull requests behind every commit since `since`.
///
/// One lookup is issued per commit, at most `concurrency` at a time. Results are
/// yielded in history order whatever order the lookups finish in, then reduced
/// into a map keyed by pull request number, so a request reached through
/// several commits appears once, taken from the newest commit. Unmerged
/// requests are dropped.
///
/// Failures never propagate: a failed history walk yields an empty set and a
/// failed lookup contributes nothing. Both are logged as warnings.
///
/// # Arguments
/// * `repo` - History to walk
/// * `source` - Hosting service lookup
/// * `since` - Previous release (exclusive); `None` scans the whole history
/// * `concurrency` - Maximum simultaneous lookups (values below 1 are treated as 1)
///
/// # Returns
/// Merged pull requests ordered by number
pub async fn merged_pull_requests<R>(
    repo: &R,
    source: &dyn PullRequestSource,
    since: Option<&ReleaseTag>,
    concurrency: usize,
) -> Vec<PullRequest>
where
    R: Repository + ?Sized,
{
    let commits = match repo.commits_since(since.map(|tag| tag.name.as_str())) {
        Ok(commits) => commits,
        Err(e) => {
            tracing::warn!(
                "{}",
                BoundaryWarning::HistoryQueryFailed {
                    reason: e.to_string()
                }
            );
            return Vec::new();
        }
    };

    tracing::info!(
        commits = commits.len(),
        since = since.map(|tag| tag.name.as_str()).unwrap_or("<root>"),
        "resolving commits to pull requests"
    );

    let lookups: Vec<(String, crate::error::Result<Vec<PullRequest>>)> = stream::iter(commits)
        .map(|sha| async move {
            let result = source.pull_requests_for_commit(&sha).await;
            (sha, result)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut merged: BTreeMap<u64, PullRequest> = BTreeMap::new();
    for (sha, result) in lookups {
        match result {
            Ok(pulls) => {
                for pull in pulls.into_iter().filter(PullRequest::is_merged) {
                    merged.entry(pull.number).or_insert(pull);
                }
            }
            Err(e) => tracing::warn!(
                "{}",
                BoundaryWarning::LookupFailed {
                    commit: sha,
                    reason: e.to_string()
                }
            ),
        }
    }

    merged.into_values().collect()
}
