use crate::error::{DrafterError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// History is linear: commits are stored newest first and each tag points at
/// one of them. Tags are reported in insertion order, which callers treat as
/// newest first.
pub struct MockRepository {
    history: Vec<String>,
    tags: Vec<(String, String)>,
    fail: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            history: Vec::new(),
            tags: Vec::new(),
            fail: false,
        }
    }

    /// Append a commit below the existing ones (i.e. older than all of them)
    pub fn add_commit(&mut self, sha: impl Into<String>) {
        self.history.push(sha.into());
    }

    /// Add a tag pointing at `sha`; add newer tags first
    pub fn add_tag(&mut self, name: impl Into<String>, sha: impl Into<String>) {
        self.tags.push((name.into(), sha.into()));
    }

    /// Make every query fail, as a broken checkout would
    pub fn failing() -> Self {
        MockRepository {
            fail: true,
            ..MockRepository::new()
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            return Err(DrafterError::Git(git2::Error::from_str(
                "mock repository failure",
            )));
        }
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn tags_by_recency(&self) -> Result<Vec<String>> {
        self.check()?;
        Ok(self
            .tags
            .iter()
            .filter(|(_, sha)| self.history.contains(sha))
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<String>> {
        self.check()?;
        let Some(tag) = tag else {
            return Ok(self.history.clone());
        };

        let tags: HashMap<&str, &str> = self
            .tags
            .iter()
            .map(|(name, sha)| (name.as_str(), sha.as_str()))
            .collect();
        let sha = tags.get(tag).ok_or_else(|| {
            DrafterError::Git(git2::Error::from_str(&format!("tag not found: {}", tag)))
        })?;

        Ok(self
            .history
            .iter()
            .take_while(|commit| commit.as_str() != *sha)
            .cloned()
            .collect())
    }
}
