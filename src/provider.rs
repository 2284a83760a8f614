//! Repository data access for the dashboard views.
//!
//! [`RepoDataProvider`] owns the connection to one repository, walks its
//! history on demand and keeps the last complete result of each aggregation
//! until [`RepoDataProvider::clear_cache`] is called.
//!
//! Every method takes `&mut self`, so one provider serves one caller at a
//! time. Callers that share it across threads wrap it in a `Mutex`, which
//! also means at most one walk per provider is ever in flight.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::aggregate::{collect_recent, tally_authors, tally_hours};
use crate::cache::ResultCache;
use crate::error::{InsightError, Result};
use crate::git::{Connection, History};
use crate::model::{AggregationKind, AuthorHistogram, HourHistogram, RecentCommits};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Unconnected,
    Connecting,
    Connected,
}

/// Connection bookkeeping, kept apart from the cache so a walk can run while
/// a cache slot is borrowed.
struct Session {
    path: PathBuf,
    connection: Option<Connection>,
    state: ConnectionState,
    branch: Option<String>,
    walks: usize,
}

impl Session {
    fn connect(&mut self) -> Result<()> {
        info!("Connecting to repository at: {}", self.path.display());
        self.connection = None;
        self.branch = None;
        self.state = ConnectionState::Connecting;

        let opened = Connection::open(&self.path)
            .and_then(|connection| connection.probe().map(|branch| (connection, branch)));
        match opened {
            Ok((connection, branch)) => {
                info!(
                    "Connected. Active branch: {}",
                    branch.as_deref().unwrap_or("HEAD (detached)")
                );
                self.connection = Some(connection);
                self.branch = branch;
                self.state = ConnectionState::Connected;
                Ok(())
            }
            Err(e) => {
                self.state = ConnectionState::Unconnected;
                Err(e)
            }
        }
    }

    /// Open a connection if there is none; otherwise re-probe it and
    /// reconnect once if the probe fails.
    fn ensure_connected(&mut self) -> Result<()> {
        let probe = self.connection.as_ref().map(Connection::probe);
        match probe {
            None => {
                debug!("No repository connection, connecting now");
                self.connect()
            }
            Some(Ok(branch)) => {
                self.branch = branch;
                Ok(())
            }
            Some(Err(e)) => {
                warn!("Repository connection lost ({e}), reconnecting");
                self.connection = None;
                self.branch = None;
                self.state = ConnectionState::Unconnected;
                self.connect()
            }
        }
    }

    /// Walk the history over the current connection. Callers have already
    /// passed `ensure_connected`.
    fn history(&mut self, kind: AggregationKind) -> Result<History<'_>> {
        let connection = self
            .connection
            .as_ref()
            .ok_or_else(|| InsightError::connection(&self.path, "connection was not established"))?;
        self.walks += 1;
        debug!("Walking history for {kind} (walk #{})", self.walks);
        connection
            .walk()
            .map_err(|e| InsightError::aggregation(kind, e))
    }
}

pub struct RepoDataProvider {
    session: Session,
    cache: ResultCache,
}

impl RepoDataProvider {
    /// Bind a provider to `path`. Nothing is opened until the first call.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        Self {
            session: Session {
                path,
                connection: None,
                state: ConnectionState::Unconnected,
                branch: None,
                walks: 0,
            },
            cache: ResultCache::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.session.path
    }

    pub fn state(&self) -> ConnectionState {
        self.session.state
    }

    /// Branch seen by the last successful probe; `None` when detached or unconnected.
    pub fn branch(&self) -> Option<&str> {
        self.session.branch.as_deref()
    }

    /// Number of full history walks started so far.
    pub fn walk_count(&self) -> usize {
        self.session.walks
    }

    /// Open the repository and probe it. On failure no connection is kept.
    pub fn connect(&mut self) -> Result<()> {
        self.session.connect()
    }

    pub fn commits_by_hour(&mut self) -> Result<&HourHistogram> {
        self.session.ensure_connected()?;
        let session = &mut self.session;
        self.cache.hours_or_try_fill(|| -> Result<HourHistogram> {
            let kind = AggregationKind::Hour;
            let hours = session
                .history(kind)
                .and_then(|history| {
                    tally_hours(history).map_err(|e| InsightError::aggregation(kind, e))
                })
                .inspect_err(|e| warn!("{e}"))?;
            debug!("Processed {} commits", hours.total());
            Ok(hours)
        })
    }

    /// Commits whose author name is empty are left out of the totals.
    pub fn commits_by_author(&mut self) -> Result<&AuthorHistogram> {
        self.session.ensure_connected()?;
        let session = &mut self.session;
        self.cache.authors_or_try_fill(|| -> Result<AuthorHistogram> {
            let kind = AggregationKind::Author;
            let authors = session
                .history(kind)
                .and_then(|history| {
                    tally_authors(history).map_err(|e| InsightError::aggregation(kind, e))
                })
                .inspect_err(|e| warn!("{e}"))?;
            debug!(
                "Processed {} attributed commits from {} authors",
                authors.total(),
                authors.len()
            );
            Ok(authors)
        })
    }

    /// Up to `limit` most recent commits. The cached list is reused only for
    /// the same `limit`; any other limit walks again and replaces it.
    pub fn recent_commits(&mut self, limit: usize) -> Result<&RecentCommits> {
        self.session.ensure_connected()?;
        let session = &mut self.session;
        self.cache.recent_or_try_fill(limit, || -> Result<RecentCommits> {
            let kind = AggregationKind::Recent;
            let recent = session
                .history(kind)
                .and_then(|history| {
                    collect_recent(history, limit).map_err(|e| InsightError::aggregation(kind, e))
                })
                .inspect_err(|e| warn!("{e}"))?;
            debug!("Retrieved {} recent commits", recent.len());
            Ok(recent)
        })
    }

    pub fn clear_cache(&mut self) {
        debug!("Clearing all caches");
        self.cache.clear();
    }

    pub fn is_cache_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_provider_is_unconnected_with_absolute_path() {
        let provider = RepoDataProvider::new("some/relative/repo");
        assert_eq!(provider.state(), ConnectionState::Unconnected);
        assert!(provider.path().is_absolute());
        assert!(provider.is_cache_empty());
        assert_eq!(provider.walk_count(), 0);
    }

    #[test]
    fn failed_connect_leaves_no_connection() {
        let dir = tempdir().unwrap();
        let mut provider = RepoDataProvider::new(dir.path());
        let err = provider.connect().unwrap_err();
        assert!(matches!(err, InsightError::NotAVersionControlRoot { .. }));
        assert_eq!(provider.state(), ConnectionState::Unconnected);
        assert!(provider.branch().is_none());
    }

    #[test]
    fn aggregation_on_missing_path_surfaces_error_and_caches_nothing() {
        let dir = tempdir().unwrap();
        let mut provider = RepoDataProvider::new(dir.path().join("gone"));
        assert!(matches!(
            provider.commits_by_hour(),
            Err(InsightError::RepositoryNotFound { .. })
        ));
        assert!(provider.is_cache_empty());
        assert_eq!(provider.walk_count(), 0);
    }
}
