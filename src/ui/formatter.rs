//! Pure formatting functions for UI output.
//!
//! `format_*` functions build text and are unit tested; `display_*` functions
//! print it. Everything here is non-interactive since the tool runs unattended.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::ReleaseDraft;
use crate::config::{BumpLabelGroups, Config};
use crate::error::Result;
use crate::domain::BumpCategory;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// The loaded configuration as YAML, indented for the console
pub fn format_config(config: &Config) -> Result<String> {
    let rendered = config.to_yaml()?;
    Ok(rendered
        .lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Show the configuration the run will use
pub fn display_config(config: &Config) -> Result<()> {
    println!("\n{}", style("Loaded config:").bold());
    println!("{}", format_config(config)?);
    Ok(())
}

/// One line per bump category listing its trigger labels
pub fn format_bump_groups(groups: &BumpLabelGroups) -> String {
    let mut lines: Vec<String> = BumpCategory::PRECEDENCE
        .iter()
        .map(|category| {
            format!(
                "  {}-bump-labels: [{}]",
                category,
                groups.labels_for(*category).join(", ")
            )
        })
        .collect();
    lines.push(format!("  default-bump: {}", groups.default));
    lines.join("\n")
}

/// Show the label groups the classifier will use
pub fn display_bump_groups(groups: &BumpLabelGroups) {
    println!("\n{}", style("Bump label groups:").bold());
    println!("{}", format_bump_groups(groups));
}

/// Show which categories matched and the decision
///
/// # Arguments
/// * `matched` - Categories with at least one matching label, in precedence order
/// * `bump` - The chosen category
pub fn display_bump_decision(matched: &[BumpCategory], bump: BumpCategory) {
    let flags: Vec<String> = BumpCategory::PRECEDENCE
        .iter()
        .map(|category| format!("{}={}", category, matched.contains(category)))
        .collect();
    display_status(&format!("Bump decision flags: {}", flags.join(" ")));
    display_success(&format!("Selected bump type: {}", bump));
}

/// Plain-text summary of a computed draft
pub fn format_release_summary(draft: &ReleaseDraft) -> String {
    let previous = draft
        .previous
        .as_ref()
        .map(|release| release.name.as_str())
        .unwrap_or("(none)");

    let mut out = String::new();
    out.push_str(&format!("Previous tag:  {}\n", previous));
    out.push_str(&format!("Merged PRs:    {}\n", draft.pull_requests.len()));
    out.push_str(&format!("Bump:          {}\n", draft.bump));
    out.push_str(&format!("Version:       {}\n", draft.version));
    out.push_str(&format!("Tag name:      {}\n", draft.tag_name));
    out.push_str(&format!("Release name:  {}\n", draft.release_name));
    if !draft.files.is_empty() {
        out.push_str(&format!("Files:         {}\n", draft.files.join(", ")));
    }
    out.push_str("\nRelease notes:\n");
    out.push_str(&draft.release_notes);
    out
}

/// Print the draft summary
pub fn display_release_summary(draft: &ReleaseDraft) {
    println!("\n{}", style("Release draft").bold().underlined());
    println!("{}", format_release_summary(draft));
}
