use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_RECENT_LIMIT: usize = 20;
pub const SHORT_ID_LEN: usize = 8;
pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const HOURS_PER_DAY: usize = 24;

/// Snapshot of a single commit, built once per history walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    pub id: String,
    pub short_id: String,
    /// Author name exactly as recorded; may be empty.
    #[serde(skip)]
    pub raw_author: String,
    pub author: String,
    pub authored_at: DateTime<FixedOffset>,
    pub summary: String,
}

impl CommitRecord {
    pub fn new(
        id: String,
        author: &str,
        authored_at: DateTime<FixedOffset>,
        message: &str,
    ) -> Self {
        let short_id = id.chars().take(SHORT_ID_LEN).collect();
        let display_author = if author.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            author.to_string()
        };
        Self {
            id,
            short_id,
            raw_author: author.to_string(),
            author: display_author,
            authored_at,
            summary: first_line(message).to_string(),
        }
    }

    /// Hour of day (0-23) in the author's own recorded offset.
    pub fn authored_hour(&self) -> u8 {
        self.authored_at.hour() as u8
    }

    pub fn has_author(&self) -> bool {
        !self.raw_author.is_empty()
    }
}

fn first_line(message: &str) -> &str {
    message.split('\n').next().unwrap_or("").trim_end_matches('\r')
}

/// Commit counts keyed by authored hour. Hours without commits are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourHistogram(BTreeMap<u8, usize>);

impl HourHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, hour: u8) {
        *self.0.entry(hour).or_insert(0) += 1;
    }

    pub fn get(&self, hour: u8) -> usize {
        self.0.get(&hour).copied().unwrap_or(0)
    }

    /// All 24 buckets, missing hours read as zero.
    pub fn counts(&self) -> [usize; HOURS_PER_DAY] {
        let mut counts = [0; HOURS_PER_DAY];
        for (&hour, &count) in &self.0 {
            if let Some(slot) = counts.get_mut(hour as usize) {
                *slot = count;
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.0.iter().map(|(&h, &c)| (h, c))
    }
}

impl Serialize for HourHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let full: BTreeMap<u8, usize> = (0..HOURS_PER_DAY as u8)
            .map(|h| (h, self.get(h)))
            .collect();
        full.serialize(serializer)
    }
}

impl FromIterator<(u8, usize)> for HourHistogram {
    fn from_iter<I: IntoIterator<Item = (u8, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Commit counts keyed by author name, compared byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuthorHistogram(BTreeMap<String, usize>);

impl AuthorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, author: &str) {
        if let Some(count) = self.0.get_mut(author) {
            *count += 1;
        } else {
            self.0.insert(author.to_string(), 1);
        }
    }

    pub fn get(&self, author: &str) -> usize {
        self.0.get(author).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Authors by commit count (highest first), ties broken by name.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.0.iter().map(|(a, &c)| (a.as_str(), c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

impl<'a> FromIterator<(&'a str, usize)> for AuthorHistogram {
    fn from_iter<I: IntoIterator<Item = (&'a str, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(a, c)| (a.to_string(), c)).collect())
    }
}

pub type RecentCommits = Vec<CommitRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationKind {
    Hour,
    Author,
    Recent,
}

impl AggregationKind {
    /// Shell pipeline producing the same numbers with plain git.
    pub fn equivalent_command(self) -> &'static str {
        match self {
            AggregationKind::Hour => {
                "git log --format='%aI' | cut -c12-13 | sort -n | uniq -c"
            }
            AggregationKind::Author => "git shortlog -sn HEAD",
            AggregationKind::Recent => "git log -n <limit> --format='%h %an %ad %s'",
        }
    }

    pub fn command_line(self, limit: usize) -> String {
        self.equivalent_command().replace("<limit>", &limit.to_string())
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregationKind::Hour => "hour",
            AggregationKind::Author => "author",
            AggregationKind::Recent => "recent",
        };
        f.write_str(name)
    }
}
