//! Main workflow orchestration logic
//!
//! Sequences tag resolution, history scanning, bump classification, version
//! arithmetic and note rendering, then fills the `tag` and `title` templates.
//! Kept apart from `main.rs` so the workflow can be driven programmatically
//! without depending on clap.

use std::path::PathBuf;

use crate::analyzer::BumpClassifier;
use crate::config::Config;
use crate::domain::{substitute_version, BumpCategory, PullRequest, ReleaseTag, Version};
use crate::error::Result;
use crate::files::normalize_files;
use crate::git::Repository;
use crate::hosting::PullRequestSource;
use crate::notes::ReleaseNotes;
use crate::resolver::latest_release;
use crate::scanner::{merged_pull_requests, DEFAULT_CONCURRENCY};

/// Arguments for the release workflow
///
/// Mirrors the CLI options that affect computation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Newline-separated auxiliary file list
    pub files: Option<String>,

    /// Directory relative file paths are checked against
    pub files_root: PathBuf,

    /// Maximum simultaneous pull request lookups
    pub concurrency: usize,
}

impl Default for WorkflowArgs {
    fn default() -> Self {
        WorkflowArgs {
            files: None,
            files_root: PathBuf::from("."),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Everything computed for the next release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseDraft {
    /// The release the version was computed from; `None` for a first release
    pub previous: Option<ReleaseTag>,

    pub bump: BumpCategory,

    pub version: Version,

    /// `tag` template with the version substituted
    pub tag_name: String,

    /// `title` template with the version substituted
    pub release_name: String,

    /// Rendered Markdown notes
    pub release_notes: String,

    /// Merged pull requests since the previous release, by number
    pub pull_requests: Vec<PullRequest>,

    /// Normalized auxiliary file list
    pub files: Vec<String>,
}

/// Main release workflow
///
/// 1. Resolve the previous release tag
/// 2. Collect merged pull requests since it (skipped when `source` is `None`)
/// 3. Classify the bump from their labels
/// 4. Compute the new version (from `0.0.0` when there is no previous release)
/// 5. Render notes and substitute the version into `tag` and `title`
///
/// # Arguments
///
/// * `config` - Parsed configuration
/// * `repo` - Version control queries
/// * `source` - Hosting lookup, or `None` when the repository context is missing
/// * `args` - File list and concurrency settings
///
/// # Returns
///
/// The release draft, or an error for an unknown default bump category
pub async fn run_release_workflow<R>(
    config: &Config,
    repo: &R,
    source: Option<&dyn PullRequestSource>,
    args: &WorkflowArgs,
) -> Result<ReleaseDraft>
where
    R: Repository + ?Sized,
{
    let previous = latest_release(repo);
    tracing::info!(
        tag = previous.as_ref().map(|t| t.name.as_str()).unwrap_or("<none>"),
        "latest release tag"
    );

    let pull_requests = match source {
        Some(source) => {
            merged_pull_requests(repo, source, previous.as_ref(), args.concurrency).await
        }
        None => Vec::new(),
    };
    tracing::info!(count = pull_requests.len(), "merged pull requests");

    let classifier = BumpClassifier::new(config.bump_groups());
    let bump = classifier.classify(&pull_requests)?;

    let base = previous
        .as_ref()
        .map(|release| release.version)
        .unwrap_or_default();
    let version = base.bump(bump)?;
    tracing::info!(bump = %bump, from = %base, to = %version, "computed new version");

    let computed = version.to_string();
    let release_notes = ReleaseNotes::new(&config.release_notes)
        .with_template(config.note_template.as_deref())
        .render(&pull_requests);

    let files = args
        .files
        .as_deref()
        .map(|raw| normalize_files(raw, &args.files_root))
        .unwrap_or_default();

    Ok(ReleaseDraft {
        previous,
        bump,
        version,
        tag_name: substitute_version(&config.tag, &computed),
        release_name: substitute_version(&config.title, &computed),
        release_notes,
        pull_requests,
        files,
    })
}
