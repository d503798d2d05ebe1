mod common;

use common::TestRepo;
use drafterino::domain::Version;
use drafterino::git::{Git2Repository, Repository};
use drafterino::resolver::latest_release;
use std::collections::HashSet;
use tempfile::TempDir;

fn open(test_repo: &TestRepo) -> Git2Repository {
    Git2Repository::open(test_repo.dir.path()).expect("Could not open repository")
}

#[test]
fn test_tags_ordered_newest_first() {
    let t = TestRepo::new();
    let c1 = t.commit("first", 100, &[]);
    let c2 = t.commit("second", 200, &[c1]);
    let c3 = t.commit("third", 300, &[c2]);
    t.tag_lightweight("v1.0.0", c1);
    t.tag_lightweight("release-7", c2);
    t.tag_lightweight("v1.1.0.post1", c3);

    let repo = open(&t);
    assert_eq!(
        repo.tags_by_recency().unwrap(),
        vec!["v1.1.0.post1", "release-7", "v1.0.0"]
    );

    let release = latest_release(&repo).unwrap();
    assert_eq!(release.name, "v1.1.0.post1");
    assert_eq!(release.version, Version::with_post(1, 1, 0, 1));
}

#[test]
fn test_non_version_tag_is_skipped() {
    let t = TestRepo::new();
    let c1 = t.commit("first", 100, &[]);
    let c2 = t.commit("second", 200, &[c1]);
    t.tag_lightweight("v0.3.0", c1);
    t.tag_lightweight("release-7", c2);

    let release = latest_release(&open(&t)).unwrap();
    assert_eq!(release.name, "v0.3.0");
}

#[test]
fn test_tags_on_unrelated_branches_are_ignored() {
    let t = TestRepo::new();
    let base = t.commit("base", 100, &[]);
    t.tag_lightweight("v1.0.0", base);

    let side = t.commit_on("refs/heads/side", "side work", 500, &[base]);
    t.tag_lightweight("v9.0.0", side);

    t.commit("main work", 200, &[base]);

    let repo = open(&t);
    assert_eq!(repo.tags_by_recency().unwrap(), vec!["v1.0.0"]);
    assert_eq!(latest_release(&repo).unwrap().name, "v1.0.0");
}

#[test]
fn test_annotated_tags_use_tagger_time() {
    let t = TestRepo::new();
    let c1 = t.commit("first", 100, &[]);
    let c2 = t.commit("second", 500, &[c1]);
    // tagged long after its commit, so it is the most recently created tag
    t.tag_annotated("v2.0.0", c1, 1000);
    t.tag_lightweight("v1.5.0", c2);

    let repo = open(&t);
    assert_eq!(repo.tags_by_recency().unwrap(), vec!["v2.0.0", "v1.5.0"]);
}

#[test]
fn test_equal_timestamps_prefer_tag_nearest_head() {
    let t = TestRepo::new();
    let c1 = t.commit("first", 100, &[]);
    let c2 = t.commit("second", 100, &[c1]);
    t.tag_lightweight("v1.0.0", c1);
    t.tag_lightweight("v1.0.1", c2);

    assert_eq!(latest_release(&open(&t)).unwrap().name, "v1.0.1");
}

#[test]
fn test_commits_since_tag() {
    let t = TestRepo::new();
    let c1 = t.commit("first", 100, &[]);
    let c2 = t.commit("second", 200, &[c1]);
    let c3 = t.commit("third", 300, &[c2]);
    t.tag_lightweight("v1.0.0", c1);

    let repo = open(&t);
    assert_eq!(
        repo.commits_since(Some("v1.0.0")).unwrap(),
        vec![c3.to_string(), c2.to_string()]
    );
    assert_eq!(repo.commits_since(None).unwrap().len(), 3);
    assert!(repo.commits_since(Some("v7.7.7")).is_err());
}

#[test]
fn test_commits_since_includes_merged_branch() {
    let t = TestRepo::new();
    let base = t.commit("base", 100, &[]);
    t.tag_annotated("v1.0.0", base, 100);
    let feature = t.commit_on("refs/heads/feature", "feature", 200, &[base]);
    let main = t.commit("main", 300, &[base]);
    let merge = t.commit("Merge pull request #7", 400, &[main, feature]);

    let commits: HashSet<String> = open(&t)
        .commits_since(Some("v1.0.0"))
        .unwrap()
        .into_iter()
        .collect();
    let expected: HashSet<String> = [merge, main, feature]
        .iter()
        .map(|oid| oid.to_string())
        .collect();
    assert_eq!(commits, expected);
}

#[test]
fn test_empty_repository_has_no_release() {
    let t = TestRepo::new();
    let repo = open(&t);
    assert!(repo.tags_by_recency().is_err());
    assert_eq!(latest_release(&repo), None);
}

#[test]
fn test_open_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    assert!(Git2Repository::open(dir.path()).is_err());
}
