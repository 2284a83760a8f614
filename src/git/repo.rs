use crate::error::{Cause, InsightError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use gix::revision::walk::Sorting;
use gix::traverse::commit::simple::CommitTimeOrder;
use gix::{ObjectId, Repository};
use std::path::{Path, PathBuf};

pub const METADATA_DIR: &str = ".git";

/// A walk over the reachable history, newest commit first.
pub type History<'repo> =
    Box<dyn Iterator<Item = std::result::Result<CommitRecord, Cause>> + 'repo>;

/// An open handle on one repository root.
pub struct Connection {
    repo: Repository,
    root: PathBuf,
}

impl Connection {
    /// Open the repository rooted at `root`, checking both preconditions
    /// separately before handing the path to gix. Callers probe afterwards.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        check_root(root)?;

        let repo = gix::open(root).map_err(|e| InsightError::connection(root, e))?;
        Ok(Self {
            repo,
            root: root.to_path_buf(),
        })
    }

    /// Liveness check: the metadata directory is still on disk and HEAD can
    /// be read. Returns the checked-out branch, `None` when HEAD is detached.
    pub fn probe(&self) -> Result<Option<String>> {
        if !self.root.join(METADATA_DIR).exists() {
            return Err(InsightError::connection(
                &self.root,
                "repository metadata directory is no longer present",
            ));
        }

        let head_name = self
            .repo
            .head_name()
            .map_err(|e| InsightError::connection(&self.root, e))?;

        Ok(head_name.map(|name| {
            let full = name.as_bstr().to_string();
            full.strip_prefix("refs/heads/")
                .map(str::to_string)
                .unwrap_or(full)
        }))
    }

    /// All commits reachable from HEAD, ordered by commit time newest first
    /// (the order `git log` uses). An unborn HEAD is an empty history.
    pub fn walk(&self) -> std::result::Result<History<'_>, Cause> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Ok(Box::new(std::iter::empty()));
        }
        let head_id: ObjectId = head.peel_to_commit_in_place()?.id;

        let walk = self
            .repo
            .rev_walk([head_id])
            .sorting(Sorting::ByCommitTime(CommitTimeOrder::NewestFirst))
            .all()?;

        let repo = &self.repo;
        Ok(Box::new(walk.map(move |info| -> std::result::Result<CommitRecord, Cause> {
            let info = info?;
            load_record(repo, info.id)
        })))
    }
}

fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(InsightError::RepositoryNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.join(METADATA_DIR).exists() {
        return Err(InsightError::NotAVersionControlRoot {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

fn load_record(repo: &Repository, id: ObjectId) -> std::result::Result<CommitRecord, Cause> {
    let commit = repo.find_commit(id)?;
    let author = commit.author()?;
    let time = author.time()?;

    let offset = FixedOffset::east_opt(time.offset)
        .ok_or_else(|| format!("Invalid author offset {} on {id}", time.offset))?;
    let authored_at = DateTime::from_timestamp(time.seconds, 0)
        .ok_or_else(|| format!("Invalid author timestamp {} on {id}", time.seconds))?
        .with_timezone(&offset);

    let message = commit.message_raw()?.to_string();
    Ok(CommitRecord::new(
        id.to_string(),
        &author.name.to_string(),
        authored_at,
        &message,
    ))
}
