use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use std::path::PathBuf;

use crate::git::METADATA_DIR;
use crate::logging::{init_logging, Fallback};
use crate::model::{AggregationKind, DEFAULT_RECENT_LIMIT};
use crate::provider::RepoDataProvider;

#[derive(Parser)]
#[command(name = "ginsight")]
#[command(about = "Analyze git repository commit patterns: by hour, by author, and recent commits")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to git repository", default_value = ".")]
    pub repo: PathBuf,

    #[arg(
        long,
        help = "Number of commits in the recent commits view",
        default_value_t = DEFAULT_RECENT_LIMIT
    )]
    pub limit: usize,

    #[arg(long, value_enum, help = "Print one aggregation as JSON instead of starting the UI")]
    pub json: Option<JsonView>,

    #[arg(long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, help = "Append log output to this file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum JsonView {
    Hours,
    Authors,
    Recent,
}

impl From<JsonView> for AggregationKind {
    fn from(view: JsonView) -> Self {
        match view {
            JsonView::Hours => AggregationKind::Hour,
            JsonView::Authors => AggregationKind::Author,
            JsonView::Recent => AggregationKind::Recent,
        }
    }
}

/// Why the command line was rejected before any work started.
#[derive(Debug, PartialEq, Eq)]
pub enum Rejection {
    MissingPath,
    NotARepository,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn check_repo(&self) -> std::result::Result<(), Rejection> {
        if !self.repo.exists() {
            Err(Rejection::MissingPath)
        } else if !self.repo.join(METADATA_DIR).exists() {
            Err(Rejection::NotARepository)
        } else {
            Ok(())
        }
    }

    /// Run the selected mode; returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        if let Err(rejection) = self.check_repo() {
            let message = match rejection {
                Rejection::MissingPath => "Repository path does not exist",
                Rejection::NotARepository => "Not a git repository",
            };
            eprintln!(
                "{} {}: {}",
                style("Error:").red().bold(),
                message,
                self.repo.display()
            );
            return Ok(1);
        }

        let fallback = if self.json.is_some() {
            Fallback::Stderr
        } else {
            Fallback::Silent
        };
        init_logging(self.debug, self.log_file.as_deref(), fallback)?;

        let mut provider = RepoDataProvider::new(&self.repo);
        match self.json {
            Some(view) => crate::export::exec(&mut provider, view.into(), self.limit)?,
            None => crate::tui::run(&mut provider, self.limit)?,
        }
        Ok(0)
    }
}
