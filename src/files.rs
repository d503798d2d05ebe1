//! Auxiliary file list handling

use crate::boundary::BoundaryWarning;
use std::path::Path;

/// Normalize a newline-separated file list and check each entry exists.
///
/// Entries are trimmed, a leading `./` is dropped, blanks and duplicates are
/// removed and order is kept. Relative paths are checked against `root`. A
/// missing file is logged as a warning and still returned, since the list is
/// only diagnostic here.
///
/// # Arguments
/// * `raw` - Newline-separated paths
/// * `root` - Directory relative paths are resolved against
pub fn normalize_files(raw: &str, root: &Path) -> Vec<String> {
    let mut files: Vec<String> = Vec::new();

    for line in raw.lines() {
        let entry = line.trim();
        let entry = entry.strip_prefix("./").unwrap_or(entry).trim();
        if entry.is_empty() || files.iter().any(|f| f == entry) {
            continue;
        }

        if root.join(entry).exists() {
            tracing::info!(file = %entry, "found release file");
        } else {
            tracing::warn!(
                "{}",
                BoundaryWarning::MissingFile {
                    path: entry.to_string()
                }
            );
        }
        files.push(entry.to_string());
    }

    files
}
