pub mod aggregate;
pub mod cache;
pub mod cli;
pub mod error;
pub mod export;
pub mod git;
pub mod logging;
pub mod model;
pub mod provider;
pub mod tui;

pub use error::{InsightError, Result};
pub use model::{AggregationKind, AuthorHistogram, CommitRecord, HourHistogram, RecentCommits};
pub use provider::{ConnectionState, RepoDataProvider};
