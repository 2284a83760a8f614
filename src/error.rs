use std::path::PathBuf;

use thiserror::Error;

use crate::model::AggregationKind;

pub type Result<T> = std::result::Result<T, InsightError>;

/// Boxed underlying cause carried by connection and aggregation failures.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Repository path does not exist: {}", path.display())]
    RepositoryNotFound { path: PathBuf },
    #[error("Not a git repository (no .git directory found): {}", path.display())]
    NotAVersionControlRoot { path: PathBuf },
    #[error("Error connecting to repository {}: {source}", path.display())]
    ConnectionFailed {
        path: PathBuf,
        #[source]
        source: Cause,
    },
    #[error("Error fetching commits by {kind}: {source}")]
    AggregationFailed {
        kind: AggregationKind,
        #[source]
        source: Cause,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InsightError {
    pub fn connection(path: impl Into<PathBuf>, source: impl Into<Cause>) -> Self {
        InsightError::ConnectionFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn aggregation(kind: AggregationKind, source: impl Into<Cause>) -> Self {
        InsightError::AggregationFailed {
            kind,
            source: source.into(),
        }
    }
}
