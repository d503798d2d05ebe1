//! Tag resolution: find the release the next version is computed from

use crate::boundary::BoundaryWarning;
use crate::domain::ReleaseTag;
use crate::git::Repository;

/// Finds the most recent version tag reachable from `HEAD`.
///
/// Tags are tried newest first; the first one whose name parses as a version
/// (optional `v`, SemVer core, optional `.postN`) wins. Unrelated tags such as
/// `release-7` are skipped.
///
/// # Returns
/// * `Some(ReleaseTag)` - The previous release
/// * `None` - No qualifying tag, or the tag query failed (logged as a warning)
pub fn latest_release<R: Repository + ?Sized>(repo: &R) -> Option<ReleaseTag> {
    let tags = match repo.tags_by_recency() {
        Ok(tags) => tags,
        Err(e) => {
            tracing::warn!(
                "{}",
                BoundaryWarning::TagQueryFailed {
                    reason: e.to_string()
                }
            );
            return None;
        }
    };

    for name in &tags {
        match ReleaseTag::parse(name) {
            Some(release) => {
                tracing::debug!(tag = %release.name, version = %release.version, "resolved previous release");
                return Some(release);
            }
            None => tracing::debug!(tag = %name, "skipping non-version tag"),
        }
    }

    tracing::info!("{}", BoundaryWarning::NoReleaseTag);
    None
}
