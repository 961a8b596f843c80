//! Detail snapshot cache
//!
//! Holds at most one snapshot per service. A snapshot younger than the
//! freshness window is served without touching the network; anything older
//! is only used as a placeholder while a new fetch runs.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};

/// A detail payload together with the time it was captured
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSnapshot<T> {
    pub payload: T,
    pub captured_at: Instant,
}

impl<T> DetailSnapshot<T> {
    pub fn new(payload: T, captured_at: Instant) -> Self {
        Self {
            payload,
            captured_at,
        }
    }

    /// Time elapsed since capture (zero if `now` is earlier)
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.captured_at)
    }

    /// Fresh means strictly younger than the window
    pub fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        self.age(now) < window
    }
}

/// Per-service snapshot cache with a freshness window
#[derive(Debug, Clone)]
pub struct StatsCache<T> {
    entries: HashMap<String, DetailSnapshot<T>>,
    freshness: Duration,
}

impl<T> StatsCache<T> {
    pub fn new(freshness: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            freshness,
        }
    }

    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Latest snapshot for a service, fresh or not
    pub fn get(&self, id: &str) -> Option<&DetailSnapshot<T>> {
        self.entries.get(id)
    }

    /// Latest snapshot for a service, only if still fresh at `now`
    pub fn fresh(&self, id: &str, now: Instant) -> Option<&DetailSnapshot<T>> {
        self.entries
            .get(id)
            .filter(|snapshot| snapshot.is_fresh(now, self.freshness))
    }

    /// Store a snapshot, replacing whatever was there
    pub fn insert(&mut self, id: impl Into<String>, snapshot: DetailSnapshot<T>) {
        self.entries.insert(id.into(), snapshot);
    }

    /// Serve a fresh snapshot or run `fetch` and store its result
    ///
    /// `fetch` runs at most once and only when no fresh snapshot exists. A
    /// failed fetch leaves the cache untouched.
    pub fn get_or_fetch<F, E>(
        &mut self,
        id: &str,
        now: Instant,
        fetch: F,
    ) -> Result<&DetailSnapshot<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let fresh = self.fresh(id, now).is_some();
        match self.entries.entry(id.to_string()) {
            Entry::Occupied(entry) if fresh => {
                tracing::debug!("Serving cached detail for {}", id);
                let snapshot: &DetailSnapshot<T> = entry.into_mut();
                Ok(snapshot)
            }
            entry => {
                let snapshot = DetailSnapshot::new(fetch()?, now);
                let stored: &DetailSnapshot<T> = match entry {
                    Entry::Occupied(mut occupied) => {
                        occupied.insert(snapshot);
                        occupied.into_mut()
                    }
                    Entry::Vacant(vacant) => vacant.insert(snapshot),
                };
                Ok(stored)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn test_fetch_runs_once_within_window() {
        let mut cache: StatsCache<u32> = StatsCache::new(WINDOW);
        let t0 = Instant::now();
        let calls = Cell::new(0);
        let fetch = || -> Result<u32, String> {
            calls.set(calls.get() + 1);
            Ok(calls.get())
        };

        let first = cache.get_or_fetch("Pi-hole", t0, fetch).unwrap().payload;
        let second = cache
            .get_or_fetch("Pi-hole", t0 + Duration::from_secs(30), fetch)
            .unwrap()
            .payload;

        assert_eq!(first, 1);
        assert_eq!(second, 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_stale_snapshot_is_refetched() {
        let mut cache: StatsCache<&str> = StatsCache::new(WINDOW);
        let t0 = Instant::now();
        cache
            .get_or_fetch("Sonarr", t0, || Ok::<_, String>("old"))
            .unwrap();

        let later = t0 + Duration::from_secs(61);
        let snapshot = cache
            .get_or_fetch("Sonarr", later, || Ok::<_, String>("new"))
            .unwrap();
        assert_eq!(snapshot.payload, "new");
        assert_eq!(snapshot.captured_at, later);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_window_boundary_is_stale() {
        let mut cache: StatsCache<u8> = StatsCache::new(WINDOW);
        let t0 = Instant::now();
        cache.insert("Sonarr", DetailSnapshot::new(1, t0));

        assert!(cache.fresh("Sonarr", t0 + Duration::from_secs(59)).is_some());
        assert!(cache.fresh("Sonarr", t0 + WINDOW).is_none());
        assert!(cache.get("Sonarr").is_some());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_snapshot() {
        let mut cache: StatsCache<u8> = StatsCache::new(WINDOW);
        let t0 = Instant::now();
        cache.insert("Sonarr", DetailSnapshot::new(1, t0));

        let err = cache
            .get_or_fetch("Sonarr", t0 + Duration::from_secs(90), || Err("refused"))
            .unwrap_err();
        assert_eq!(err, "refused");
        assert_eq!(cache.get("Sonarr").map(|s| s.payload), Some(1));
    }

    #[test]
    fn test_services_are_independent() {
        let mut cache: StatsCache<u8> = StatsCache::new(WINDOW);
        let t0 = Instant::now();
        cache.insert("Pi-hole", DetailSnapshot::new(1, t0));
        assert!(cache.fresh("Sonarr", t0).is_none());
        assert!(cache.fresh("Pi-hole", t0).is_some());
    }

    #[test]
    fn test_insert_is_last_writer_wins() {
        let mut cache: StatsCache<u8> = StatsCache::new(WINDOW);
        let t0 = Instant::now();
        cache.insert("Pi-hole", DetailSnapshot::new(1, t0 + Duration::from_secs(5)));
        cache.insert("Pi-hole", DetailSnapshot::new(2, t0));
        assert_eq!(cache.get("Pi-hole").map(|s| s.payload), Some(2));
    }

    #[test]
    fn test_age_never_negative() {
        let t0 = Instant::now();
        let snapshot = DetailSnapshot::new((), t0 + Duration::from_secs(5));
        assert_eq!(snapshot.age(t0), Duration::ZERO);
    }
}
