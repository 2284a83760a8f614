use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::model::AggregationKind;
use crate::provider::RepoDataProvider;

#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub repository: String,
    pub branch: Option<String>,
    pub view: String,
    pub command: String,
    pub data: Value,
}

pub fn exec(
    provider: &mut RepoDataProvider,
    kind: AggregationKind,
    limit: usize,
) -> anyhow::Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Walking history for commits by {kind}..."));
    pb.enable_steady_tick(Duration::from_millis(100));

    let output = build_output(provider, kind, limit);
    pb.finish_and_clear();

    println!("{}", serde_json::to_string_pretty(&output?)?);
    Ok(())
}

pub fn build_output(
    provider: &mut RepoDataProvider,
    kind: AggregationKind,
    limit: usize,
) -> anyhow::Result<ExportOutput> {
    let data = match kind {
        AggregationKind::Hour => serde_json::to_value(
            provider
                .commits_by_hour()
                .context("Failed to count commits by hour")?,
        )?,
        AggregationKind::Author => serde_json::to_value(
            provider
                .commits_by_author()
                .context("Failed to count commits by author")?,
        )?,
        AggregationKind::Recent => serde_json::to_value(
            provider
                .recent_commits(limit)
                .context("Failed to load recent commits")?,
        )?,
    };

    Ok(ExportOutput {
        repository: provider.path().to_string_lossy().to_string(),
        branch: provider.branch().map(str::to_string),
        view: kind.to_string(),
        command: kind.command_line(limit),
        data,
    })
}
