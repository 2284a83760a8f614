use crate::model::{AuthorHistogram, CommitRecord, HourHistogram, RecentCommits};

/// Single pass over the history. The first failed entry aborts the tally.
pub fn tally_hours<I, E>(commits: I) -> Result<HourHistogram, E>
where
    I: IntoIterator<Item = Result<CommitRecord, E>>,
{
    let mut hours = HourHistogram::new();
    for commit in commits {
        hours.record(commit?.authored_hour());
    }
    Ok(hours)
}

/// Commits without an author name are skipped, not counted as "Unknown".
pub fn tally_authors<I, E>(commits: I) -> Result<AuthorHistogram, E>
where
    I: IntoIterator<Item = Result<CommitRecord, E>>,
{
    let mut authors = AuthorHistogram::new();
    for commit in commits {
        let commit = commit?;
        if commit.has_author() {
            authors.record(&commit.raw_author);
        }
    }
    Ok(authors)
}

/// Takes at most `limit` commits in traversal order; stops reading after that.
pub fn collect_recent<I, E>(commits: I, limit: usize) -> Result<RecentCommits, E>
where
    I: IntoIterator<Item = Result<CommitRecord, E>>,
{
    commits.into_iter().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InsightError, Result};
    use crate::model::AggregationKind;
    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;

    fn commit(n: usize, author: &str, hour: u32) -> Result<CommitRecord> {
        let tz = FixedOffset::east_opt(0).unwrap();
        Ok(CommitRecord::new(
            format!("{n:040x}"),
            author,
            tz.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap(),
            &format!("C{n}"),
        ))
    }

    fn broken() -> Result<CommitRecord> {
        Err(InsightError::aggregation(AggregationKind::Hour, "corrupt object"))
    }

    #[test]
    fn hours_scenario() {
        let history = vec![
            commit(4, "a", 9),
            commit(3, "a", 9),
            commit(2, "a", 14),
            commit(1, "a", 23),
        ];
        let hours = tally_hours(history).unwrap();
        let expected: HourHistogram = [(9, 2), (14, 1), (23, 1)].into_iter().collect();
        assert_eq!(hours, expected);
        assert_eq!(hours.total(), 4);
    }

    #[test]
    fn authors_scenario_drops_empty_name() {
        let history = vec![
            commit(4, "Alice", 1),
            commit(3, "Bob", 1),
            commit(2, "Alice", 1),
            commit(1, "", 1),
        ];
        let authors = tally_authors(history).unwrap();
        let expected: AuthorHistogram = [("Alice", 2), ("Bob", 1)].into_iter().collect();
        assert_eq!(authors, expected);
        assert_eq!(authors.total(), 3);
    }

    #[test]
    fn recent_keeps_traversal_order() {
        let history: Vec<_> = (1..=5).rev().map(|n| commit(n, "a", 0)).collect();
        let recent = collect_recent(history, 2).unwrap();
        let summaries: Vec<_> = recent.iter().map(|c| c.summary.as_str()).collect();
        assert_eq!(summaries, vec!["C5", "C4"]);
    }

    #[test]
    fn recent_does_not_read_past_limit() {
        let history = vec![commit(2, "a", 0), commit(1, "a", 0), broken()];
        assert_eq!(collect_recent(history, 2).unwrap().len(), 2);
    }

    #[test]
    fn failure_mid_walk_yields_no_partial_result() {
        let history = vec![commit(2, "a", 3), broken(), commit(1, "a", 4)];
        assert!(tally_hours(history).is_err());

        let history = vec![commit(2, "a", 3), broken()];
        assert!(tally_authors(history).is_err());
    }
}
