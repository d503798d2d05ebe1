use crate::error::{DrafterError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }

    fn with_repo<T>(&self, f: impl FnOnce(&Git2Repo) -> Result<T>) -> Result<T> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| DrafterError::Git(git2::Error::from_str("repository lock poisoned")))?;
        f(&repo)
    }
}

/// Position of every commit reachable from HEAD, 0 being HEAD itself
fn head_positions(repo: &Git2Repo) -> Result<HashMap<Oid, usize>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
    revwalk.push_head()?;

    let mut positions = HashMap::new();
    for (index, oid) in revwalk.enumerate() {
        positions.insert(oid?, index);
    }
    Ok(positions)
}

impl super::Repository for Git2Repository {
    fn tags_by_recency(&self) -> Result<Vec<String>> {
        self.with_repo(|repo| {
            let positions = head_positions(repo)?;
            let names = repo.tag_names(None)?;

            // (created, distance from HEAD, name)
            let mut candidates: Vec<(i64, usize, String)> = Vec::new();

            for name in names.iter().flatten() {
                let reference = match repo.find_reference(&format!("refs/tags/{}", name)) {
                    Ok(reference) => reference,
                    Err(_) => continue,
                };
                let commit = match reference.peel_to_commit() {
                    Ok(commit) => commit,
                    Err(_) => continue,
                };
                let Some(&position) = positions.get(&commit.id()) else {
                    continue;
                };

                // Annotated tags are dated by the tagger, lightweight tags by their commit
                let created = reference
                    .peel_to_tag()
                    .ok()
                    .and_then(|tag| tag.tagger().map(|sig| sig.when().seconds()))
                    .unwrap_or_else(|| commit.time().seconds());

                candidates.push((created, position, name.to_string()));
            }

            candidates.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

            Ok(candidates.into_iter().map(|(_, _, name)| name).collect())
        })
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<String>> {
        self.with_repo(|repo| {
            let mut revwalk = repo.revwalk()?;
            revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
            revwalk.push_head()?;

            if let Some(tag) = tag {
                let boundary = repo
                    .find_reference(&format!("refs/tags/{}", tag))?
                    .peel_to_commit()?;
                revwalk.hide(boundary.id())?;
            }

            let mut commits = Vec::new();
            for oid in revwalk {
                commits.push(oid?.to_string());
            }
            Ok(commits)
        })
    }
}
