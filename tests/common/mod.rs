// Shared helpers for building throwaway git repositories with fixed timestamps.
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        TestRepo { dir, repo }
    }

    fn signature(time: i64) -> Signature<'static> {
        Signature::new("Test User", "test@example.com", &Time::new(time, 0))
            .expect("Could not build signature")
    }

    /// Commit an empty tree, advancing `update_ref` (e.g. "HEAD" or "refs/heads/side")
    pub fn commit_on(&self, update_ref: &str, message: &str, time: i64, parents: &[Oid]) -> Oid {
        let tree_id = self
            .repo
            .treebuilder(None)
            .expect("Could not create treebuilder")
            .write()
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let parents: Vec<_> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).expect("Could not find parent"))
            .collect();
        let parent_refs: Vec<_> = parents.iter().collect();
        let sig = Self::signature(time);

        self.repo
            .commit(Some(update_ref), &sig, &sig, message, &tree, &parent_refs)
            .expect("Could not create commit")
    }

    /// Commit on the checked-out branch
    pub fn commit(&self, message: &str, time: i64, parents: &[Oid]) -> Oid {
        self.commit_on("HEAD", message, time, parents)
    }

    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn tag_annotated(&self, name: &str, oid: Oid, time: i64) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag(name, &object, &Self::signature(time), name, false)
            .expect("Could not create annotated tag");
    }
}
