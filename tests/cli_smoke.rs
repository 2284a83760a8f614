mod common;

use assert_cmd::prelude::*;
use common::{commit_at, has_git, init_git_repo};
use std::process::Command;
use tempfile::tempdir;

#[test]
fn non_repository_exits_with_error() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("ginsight").unwrap();
    cmd.arg(dir.path());
    let out = cmd.assert().code(1).get_output().stderr.clone();
    let stderr = String::from_utf8_lossy(&out);
    assert!(stderr.contains("Not a git repository"));
}

#[test]
fn hours_json_has_all_buckets() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_at(dir.path(), "Alice", "2024-03-01 09:15:00 +0200", "one");
    commit_at(dir.path(), "Bob", "2024-03-01 14:15:00 +0200", "two");

    let mut cmd = Command::cargo_bin("ginsight").unwrap();
    cmd.arg(dir.path()).args(["--json", "hours"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["view"], "hour");
    assert_eq!(v["branch"], "main");
    let data = v["data"].as_object().unwrap();
    assert_eq!(data.len(), 24);
    assert_eq!(data["9"], 1);
    assert_eq!(data["14"], 1);
}

#[test]
fn authors_json_counts_per_name() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_at(dir.path(), "Alice", "2024-03-01 09:00:00 +0000", "one");
    commit_at(dir.path(), "Alice", "2024-03-02 09:00:00 +0000", "two");
    commit_at(dir.path(), "Bob", "2024-03-03 09:00:00 +0000", "three");

    let mut cmd = Command::cargo_bin("ginsight").unwrap();
    cmd.arg(dir.path()).args(["--json", "authors"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["command"], "git shortlog -sn HEAD");
    assert_eq!(v["data"]["Alice"], 2);
    assert_eq!(v["data"]["Bob"], 1);
}

#[test]
fn recent_json_respects_limit() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    for n in 1..=4 {
        commit_at(dir.path(), "Alice", &format!("2024-03-0{n} 09:00:00 +0000"), &format!("C{n}"));
    }

    let mut cmd = Command::cargo_bin("ginsight").unwrap();
    cmd.arg(dir.path()).args(["--json", "recent", "--limit", "3"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let commits = v["data"].as_array().unwrap();
    assert_eq!(commits.len(), 3);
    assert_eq!(commits[0]["summary"], "C4");
    assert_eq!(commits[2]["summary"], "C2");
    assert!(commits[0].get("raw_author").is_none());
}
