#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) -> String {
    let out = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).unwrap().trim().to_string()
}

pub fn init_git_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Empty commit with a fixed author and date, e.g. `2024-03-01 09:15:00 +0200`.
/// The committer date matches so history order follows creation order.
pub fn commit_at(dir: &Path, author: &str, date: &str, message: &str) {
    assert!(Command::new("git")
        .args(["commit", "-q", "--allow-empty", "--no-verify", "-m", message])
        .env("GIT_AUTHOR_NAME", author)
        .env("GIT_AUTHOR_EMAIL", "author@example.com")
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

/// `git commit` refuses an empty author name, so write the object by hand
/// on top of HEAD and move the branch to it.
pub fn commit_without_author(dir: &Path, timestamp: i64, message: &str) {
    let tree = git(dir, &["rev-parse", "HEAD^{tree}"]);
    let parent = git(dir, &["rev-parse", "HEAD"]);
    let body = format!(
        "tree {tree}\nparent {parent}\n\
         author  <nobody@example.com> {timestamp} +0000\n\
         committer Your Name <you@example.com> {timestamp} +0000\n\n{message}\n"
    );

    let mut child = Command::new("git")
        .args(["hash-object", "-t", "commit", "-w", "--literally", "--stdin"])
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(body.as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    let id = String::from_utf8(out.stdout).unwrap().trim().to_string();

    git(dir, &["update-ref", "HEAD", &id]);
}
