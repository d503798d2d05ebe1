use std::fmt;

/// Non-fatal conditions at the edges of the pipeline.
///
/// Each one degrades a single component to an empty or sentinel result; the
/// run continues and still produces outputs.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Listing tags failed; treated as "no previous release"
    TagQueryFailed { reason: String },
    /// No reachable tag carries a version
    NoReleaseTag,
    /// Walking commits since the previous release failed
    HistoryQueryFailed { reason: String },
    /// No event payload path was given or the file does not exist
    MissingEventPayload { path: Option<String> },
    /// The event payload exists but is not usable JSON
    UnreadableEventPayload { path: String, reason: String },
    /// Owner, repository name or token is absent
    MissingRepositoryContext { missing: Vec<&'static str> },
    /// The pull request lookup for one commit failed
    LookupFailed { commit: String, reason: String },
    /// A listed auxiliary file does not exist
    MissingFile { path: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::TagQueryFailed { reason } => {
                write!(f, "Could not list tags ({}), assuming no previous release", reason)
            }
            BoundaryWarning::NoReleaseTag => {
                write!(f, "No version tag reachable from HEAD, starting from 0.0.0")
            }
            BoundaryWarning::HistoryQueryFailed { reason } => {
                write!(f, "Could not walk commit history: {}", reason)
            }
            BoundaryWarning::MissingEventPayload { path } => match path {
                Some(path) => write!(f, "No event payload found at '{}', skipping PR lookup", path),
                None => write!(f, "No event payload found, skipping PR lookup"),
            },
            BoundaryWarning::UnreadableEventPayload { path, reason } => {
                write!(f, "Cannot read event payload '{}': {}", path, reason)
            }
            BoundaryWarning::MissingRepositoryContext { missing } => {
                write!(
                    f,
                    "Missing repository context for API calls: {}",
                    missing.join(", ")
                )
            }
            BoundaryWarning::LookupFailed { commit, reason } => {
                let short = commit.get(..7).unwrap_or(commit.as_str());
                write!(f, "Pull request lookup failed for {}: {}", short, reason)
            }
            BoundaryWarning::MissingFile { path } => {
                write!(f, "Listed file does not exist: {}", path)
            }
        }
    }
}
