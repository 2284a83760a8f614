use crate::model::{AuthorHistogram, HourHistogram, RecentCommits};

/// In-memory results of the last complete history walk, one slot per aggregation.
///
/// Slots are only ever filled with finished results, so a failed walk leaves
/// its slot empty. The recent-commits slot remembers the limit it was built
/// with and misses for any other limit.
#[derive(Debug, Default)]
pub struct ResultCache {
    hours: Option<HourHistogram>,
    authors: Option<AuthorHistogram>,
    recent: Option<(usize, RecentCommits)>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached histogram, or the result of `fill` stored in its place.
    pub fn hours_or_try_fill<E, F>(&mut self, fill: F) -> Result<&HourHistogram, E>
    where
        F: FnOnce() -> Result<HourHistogram, E>,
    {
        let hours = match self.hours.take() {
            Some(hours) => hours,
            None => fill()?,
        };
        Ok(self.hours.insert(hours))
    }

    pub fn authors_or_try_fill<E, F>(&mut self, fill: F) -> Result<&AuthorHistogram, E>
    where
        F: FnOnce() -> Result<AuthorHistogram, E>,
    {
        let authors = match self.authors.take() {
            Some(authors) => authors,
            None => fill()?,
        };
        Ok(self.authors.insert(authors))
    }

    /// A list built for another `limit` is dropped before `fill` runs.
    pub fn recent_or_try_fill<E, F>(
        &mut self,
        limit: usize,
        fill: F,
    ) -> Result<&RecentCommits, E>
    where
        F: FnOnce() -> Result<RecentCommits, E>,
    {
        let recent = match self.recent.take() {
            Some((cached_limit, recent)) if cached_limit == limit => recent,
            _ => fill()?,
        };
        Ok(&self.recent.insert((limit, recent)).1)
    }

    pub fn clear(&mut self) {
        self.hours = None;
        self.authors = None;
        self.recent = None;
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_none() && self.authors.is_none() && self.recent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_histogram_is_still_a_populated_slot() {
        let mut cache = ResultCache::new();
        cache.hours_or_try_fill(|| Ok::<_, &str>(HourHistogram::new())).unwrap();
        assert!(!cache.is_empty());

        let hit = cache.hours_or_try_fill(|| Err::<HourHistogram, _>("walked again"));
        assert!(hit.unwrap().is_empty());
    }

    #[test]
    fn failed_fill_leaves_slot_empty() {
        let mut cache = ResultCache::new();
        let miss = cache.authors_or_try_fill(|| Err::<AuthorHistogram, _>("walk failed"));
        assert_eq!(miss.unwrap_err(), "walk failed");
        assert!(cache.is_empty());
    }

    #[test]
    fn recent_slot_is_keyed_by_limit() {
        let mut cache = ResultCache::new();
        let mut fills = 0;
        let mut fill = |limit: usize| {
            fills += 1;
            Ok::<_, &str>(Vec::with_capacity(limit))
        };

        cache.recent_or_try_fill(20, || fill(20)).unwrap();
        cache.recent_or_try_fill(20, || fill(20)).unwrap();
        cache.recent_or_try_fill(5, || fill(5)).unwrap();
        cache.recent_or_try_fill(20, || fill(20)).unwrap();
        assert_eq!(fills, 3);
    }

    #[test]
    fn recent_fill_failure_drops_old_limit() {
        let mut cache = ResultCache::new();
        cache.recent_or_try_fill(20, || Ok::<_, &str>(Vec::new())).unwrap();
        assert!(cache.recent_or_try_fill(5, || Err::<RecentCommits, _>("walk failed")).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut cache = ResultCache::new();
        cache.hours_or_try_fill(|| Ok::<_, &str>(HourHistogram::new())).unwrap();
        cache.authors_or_try_fill(|| Ok::<_, &str>(AuthorHistogram::new())).unwrap();
        cache.recent_or_try_fill(1, || Ok::<_, &str>(Vec::new())).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
