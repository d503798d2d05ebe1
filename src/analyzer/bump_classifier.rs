use crate::config::BumpLabelGroups;
use crate::domain::{BumpCategory, PullRequest};
use crate::error::Result;

/// Chooses a bump category from the labels of merged pull requests
pub struct BumpClassifier {
    groups: BumpLabelGroups,
}

impl BumpClassifier {
    /// Create a new classifier
    pub fn new(groups: BumpLabelGroups) -> Self {
        BumpClassifier { groups }
    }

    pub fn groups(&self) -> &BumpLabelGroups {
        &self.groups
    }

    /// Categories for which at least one pull request carries a configured label,
    /// in precedence order
    pub fn matched_categories(&self, pulls: &[PullRequest]) -> Vec<BumpCategory> {
        BumpCategory::PRECEDENCE
            .into_iter()
            .filter(|category| {
                let labels = self.groups.labels_for(*category);
                pulls.iter().any(|pull| pull.has_any_label(labels))
            })
            .collect()
    }

    /// Pick the bump category for a set of merged pull requests.
    ///
    /// The highest-precedence category with a matching label wins
    /// (major > minor > patch > post). Without any match the configured
    /// default applies.
    ///
    /// # Errors
    /// Returns `UnknownBumpCategory` if the default is needed and is not a
    /// recognised category name.
    pub fn classify(&self, pulls: &[PullRequest]) -> Result<BumpCategory> {
        match self.matched_categories(pulls).first() {
            Some(category) => Ok(*category),
            None => self.groups.default.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrafterError;

    fn groups(default: &str) -> BumpLabelGroups {
        BumpLabelGroups {
            major: vec!["significant".to_string()],
            minor: vec!["enhancement".to_string()],
            patch: vec!["bug".to_string()],
            post: vec!["documentation".to_string()],
            default: default.to_string(),
        }
    }

    fn pr(number: u64, labels: &[&str]) -> PullRequest {
        PullRequest::new(number, "change").with_labels(labels.iter().copied())
    }

    #[test]
    fn test_minor_beats_patch() {
        let classifier = BumpClassifier::new(groups("post"));
        let pulls = vec![pr(1, &["bug"]), pr(2, &["enhancement"])];
        assert_eq!(classifier.classify(&pulls).unwrap(), BumpCategory::Minor);
    }

    #[test]
    fn test_major_beats_everything() {
        let classifier = BumpClassifier::new(groups("post"));
        let pulls = vec![
            pr(1, &["documentation"]),
            pr(2, &["bug", "enhancement"]),
            pr(3, &["significant"]),
        ];
        assert_eq!(classifier.classify(&pulls).unwrap(), BumpCategory::Major);
        assert_eq!(
            classifier.matched_categories(&pulls),
            BumpCategory::PRECEDENCE.to_vec()
        );
    }

    #[test]
    fn test_each_single_label() {
        let classifier = BumpClassifier::new(groups("patch"));
        let cases = [
            ("significant", BumpCategory::Major),
            ("enhancement", BumpCategory::Minor),
            ("bug", BumpCategory::Patch),
            ("documentation", BumpCategory::Post),
            ("unrelated", BumpCategory::Patch),
        ];
        for (label, expected) in cases {
            assert_eq!(
                classifier.classify(&[pr(1, &[label])]).unwrap(),
                expected,
                "label {}",
                label
            );
        }
    }

    #[test]
    fn test_default_when_no_pull_requests() {
        let classifier = BumpClassifier::new(groups("post"));
        assert_eq!(classifier.classify(&[]).unwrap(), BumpCategory::Post);

        let classifier = BumpClassifier::new(groups("minor"));
        assert_eq!(classifier.classify(&[]).unwrap(), BumpCategory::Minor);
    }

    #[test]
    fn test_precedence_ignores_label_list_order() {
        let mut reordered = groups("post");
        reordered.patch = vec!["zzz".to_string(), "bug".to_string()];
        let classifier = BumpClassifier::new(reordered);
        let pulls = vec![pr(1, &["bug"]), pr(2, &["documentation"])];
        assert_eq!(classifier.classify(&pulls).unwrap(), BumpCategory::Patch);
    }

    #[test]
    fn test_unknown_default_is_error() {
        let classifier = BumpClassifier::new(groups("hotfix"));
        assert!(matches!(
            classifier.classify(&[]),
            Err(DrafterError::UnknownBumpCategory(_))
        ));
        // the default is only consulted when nothing matches
        assert_eq!(
            classifier.classify(&[pr(1, &["bug"])]).unwrap(),
            BumpCategory::Patch
        );
    }
}
