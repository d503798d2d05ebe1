//! Markdown release notes grouped by label

use crate::config::ReleaseNoteSection;
use crate::domain::PullRequest;

/// Rendered when no section has any entry
pub const NO_CHANGES: &str = "_No notable changes._";

/// Entry layout used when no `note-template` is configured
pub const DEFAULT_NOTE_TEMPLATE: &str = "- $TITLE (#$NUMBER)";

/// Renders merged pull requests into configured sections
pub struct ReleaseNotes<'a> {
    sections: &'a [ReleaseNoteSection],
    entry_template: &'a str,
}

impl<'a> ReleaseNotes<'a> {
    pub fn new(sections: &'a [ReleaseNoteSection]) -> Self {
        ReleaseNotes {
            sections,
            entry_template: DEFAULT_NOTE_TEMPLATE,
        }
    }

    /// Use a custom entry template with `$TITLE` and `$NUMBER` placeholders.
    /// Blank templates keep the default.
    pub fn with_template(mut self, template: Option<&'a str>) -> Self {
        if let Some(template) = template.filter(|t| !t.trim().is_empty()) {
            self.entry_template = template;
        }
        self
    }

    fn entry(&self, pull: &PullRequest) -> String {
        // titles are user text, so they are substituted last
        self.entry_template
            .replace("$NUMBER", &pull.number.to_string())
            .replace("$TITLE", &pull.title)
    }

    /// Render the notes.
    ///
    /// Sections appear in configuration order, each as `## <title>` followed by
    /// one line per matching pull request; empty sections are left out and
    /// sections are separated by a blank line. A pull request matching several
    /// sections is listed in each. With nothing to list the result is
    /// [NO_CHANGES].
    pub fn render(&self, pulls: &[PullRequest]) -> String {
        let rendered: Vec<String> = self
            .sections
            .iter()
            .filter_map(|section| {
                let entries: Vec<String> = pulls
                    .iter()
                    .filter(|pull| pull.has_any_label(&section.labels))
                    .map(|pull| self.entry(pull))
                    .collect();

                if entries.is_empty() {
                    None
                } else {
                    Some(format!("## {}\n{}", section.title, entries.join("\n")))
                }
            })
            .collect();

        if rendered.is_empty() {
            NO_CHANGES.to_string()
        } else {
            rendered.join("\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(number: u64, title: &str, labels: &[&str]) -> PullRequest {
        PullRequest::new(number, title).with_labels(labels.iter().copied())
    }

    fn sections() -> Vec<ReleaseNoteSection> {
        vec![
            ReleaseNoteSection::new("Fixed", ["[scope] bug"]),
            ReleaseNoteSection::new("Docs", ["[scope] documentation"]),
        ]
    }

    #[test]
    fn test_render_sections() {
        let pulls = vec![
            pr(1, "Fix bug", &["[scope] bug"]),
            pr(2, "Improve docs", &["[scope] documentation"]),
        ];
        let sections = sections();
        let notes = ReleaseNotes::new(&sections).render(&pulls);
        assert_eq!(
            notes,
            "## Fixed\n- Fix bug (#1)\n\n## Docs\n- Improve docs (#2)"
        );
    }

    #[test]
    fn test_pull_request_in_multiple_sections() {
        let sections = vec![
            ReleaseNoteSection::new("Fixed", ["bug"]),
            ReleaseNoteSection::new("Changed", ["documentation"]),
        ];
        let pulls = vec![pr(5, "Both", &["bug", "documentation"])];
        let notes = ReleaseNotes::new(&sections).render(&pulls);
        assert_eq!(notes, "## Fixed\n- Both (#5)\n\n## Changed\n- Both (#5)");
    }

    #[test]
    fn test_listed_once_per_section() {
        let sections = vec![ReleaseNoteSection::new("Fixed", ["bug", "regression"])];
        let pulls = vec![pr(5, "Both", &["bug", "regression"])];
        assert_eq!(
            ReleaseNotes::new(&sections).render(&pulls),
            "## Fixed\n- Both (#5)"
        );
    }

    #[test]
    fn test_empty_sections_omitted_and_order_kept() {
        let sections = vec![
            ReleaseNoteSection::new("Added", ["enhancement"]),
            ReleaseNoteSection::new("Removed", ["removal"]),
            ReleaseNoteSection::new("Fixed", ["bug"]),
        ];
        let pulls = vec![pr(9, "Fix", &["bug"]), pr(3, "Feature", &["enhancement"])];
        let notes = ReleaseNotes::new(&sections).render(&pulls);
        assert_eq!(notes, "## Added\n- Feature (#3)\n\n## Fixed\n- Fix (#9)");
    }

    #[test]
    fn test_placeholder_when_nothing_to_list() {
        let sections = sections();
        assert_eq!(ReleaseNotes::new(&sections).render(&[]), NO_CHANGES);
        assert_eq!(
            ReleaseNotes::new(&[]).render(&[pr(1, "x", &["[scope] bug"])]),
            NO_CHANGES
        );
        assert_eq!(
            ReleaseNotes::new(&sections).render(&[pr(1, "x", &["other"])]),
            "_No notable changes._"
        );
    }

    #[test]
    fn test_custom_entry_template() {
        let sections = vec![ReleaseNoteSection::new("Fixed", ["bug"])];
        let pulls = vec![pr(42, "Fix crash", &["bug"])];
        let notes = ReleaseNotes::new(&sections)
            .with_template(Some("* #$NUMBER: $TITLE"))
            .render(&pulls);
        assert_eq!(notes, "## Fixed\n* #42: Fix crash");

        let blank = ReleaseNotes::new(&sections)
            .with_template(Some("  "))
            .render(&pulls);
        assert_eq!(blank, "## Fixed\n- Fix crash (#42)");
    }
}
