//! Step outputs for the downstream publisher

use crate::cli::orchestration::ReleaseDraft;
use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Output names and values in the order they are written
pub fn output_pairs(draft: &ReleaseDraft) -> Vec<(&'static str, String)> {
    vec![
        ("version", draft.version.to_string()),
        ("tag_name", draft.tag_name.clone()),
        ("release_name", draft.release_name.clone()),
        ("release_notes", draft.release_notes.clone()),
        ("files", draft.files.join("\n")),
    ]
}

/// Pick a heredoc delimiter that does not occur as a line of `value`
fn delimiter_for(value: &str) -> String {
    let mut delimiter = "EOF".to_string();
    let mut n = 0;
    while value.lines().any(|line| line == delimiter) {
        n += 1;
        delimiter = format!("EOF_{}", n);
    }
    delimiter
}

/// Format one output in the `name=value` / `name<<DELIM` syntax.
///
/// Single-line values use `name=value`; anything containing a newline uses the
/// heredoc form.
pub fn format_output(name: &str, value: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        let delimiter = delimiter_for(value);
        format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
    } else {
        format!("{}={}\n", name, value)
    }
}

/// Append every output of `draft` to the file at `path`.
///
/// `release_notes` always uses the heredoc form so a publisher sees the same
/// shape whether or not the notes span several lines.
///
/// # Errors
/// Returns an I/O error if the file cannot be opened or written.
pub fn write_outputs(path: &Path, draft: &ReleaseDraft) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    for (name, value) in output_pairs(draft) {
        let line = if name == "release_notes" {
            let delimiter = delimiter_for(&value);
            format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
        } else {
            format_output(name, &value)
        };
        file.write_all(line.as_bytes())?;
    }

    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_output() {
        assert_eq!(format_output("version", "1.2.3"), "version=1.2.3\n");
        assert_eq!(format_output("files", ""), "files=\n");
    }

    #[test]
    fn test_multi_line_output() {
        assert_eq!(
            format_output("files", "a.zip\nb.zip"),
            "files<<EOF\na.zip\nb.zip\nEOF\n"
        );
    }

    #[test]
    fn test_delimiter_avoids_collision() {
        let value = "line\nEOF\nEOF_1\nmore";
        assert_eq!(
            format_output("release_notes", value),
            format!("release_notes<<EOF_2\n{}\nEOF_2\n", value)
        );
    }
}
