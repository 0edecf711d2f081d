//! Per-client fixed-window rate limiter guarding the chat engine.
//!
//! Each client id owns one [`RateLimitEntry`]. The first request of a window
//! (or the first after `window_reset_at` has passed) replaces the entry with a
//! fresh one at `count = 1`; later requests increment until the cap, after
//! which they are rejected without touching the entry.
//!
//! The check-and-increment runs while holding the key's `DashMap` entry lock,
//! so concurrent requests for the same client cannot both slip past the cap.

use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::config::RateLimitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub count: u32,
    pub window_reset_at: Instant,
}

impl RateLimitEntry {
    fn fresh(now: Instant, window: Duration) -> Self {
        Self {
            count: 1,
            window_reset_at: now + window,
        }
    }
}

#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    entries: DashMap<String, RateLimitEntry>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    /// Records a request for `client_id` and reports whether it is allowed.
    pub fn allow(&self, client_id: &str) -> bool {
        self.allow_at(client_id, Instant::now())
    }

    pub fn allow_at(&self, client_id: &str, now: Instant) -> bool {
        match self.entries.entry(client_id.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(RateLimitEntry::fresh(now, self.config.window));
                true
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                if now > entry.window_reset_at {
                    *entry = RateLimitEntry::fresh(now, self.config.window);
                    return true;
                }
                if entry.count >= self.config.max_requests {
                    warn!(client_id, count = entry.count, "rate limit exceeded");
                    return false;
                }
                entry.count += 1;
                true
            }
        }
    }

    /// Snapshot of a client's current entry.
    #[cfg(test)]
    pub fn entry(&self, client_id: &str) -> Option<RateLimitEntry> {
        self.entries.get(client_id).map(|e| *e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drops every entry whose window ended before `now`. Returns how many went.
    pub fn sweep_expired(&self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.window_reset_at >= now);
        before.saturating_sub(self.entries.len())
    }
}

/// Spawns a background task sweeping expired entries every `every`.
pub fn spawn_sweeper(limiter: Arc<RateLimiter>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = limiter.sweep_expired(Instant::now());
            if removed > 0 {
                debug!(removed, remaining = limiter.len(), "swept stale rate-limit entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter() -> RateLimiter {
        RateLimiter::new(RateLimitConfig::default())
    }

    #[test]
    fn test_first_request_creates_entry() {
        let rl = limiter();
        let now = Instant::now();
        assert!(rl.allow_at("a", now));
        let entry = rl.entry("a").unwrap();
        assert_eq!(entry.count, 1);
        assert_eq!(entry.window_reset_at, now + Duration::from_secs(60));
    }

    #[test]
    fn test_eleventh_request_in_window_rejected() {
        let rl = limiter();
        let now = Instant::now();
        for i in 0..10 {
            assert!(rl.allow_at("a", now), "request {} should pass", i + 1);
        }
        assert!(!rl.allow_at("a", now));
        // Rejection leaves the entry untouched.
        assert_eq!(rl.entry("a").unwrap().count, 10);
    }

    #[test]
    fn test_clients_have_independent_buckets() {
        let rl = limiter();
        let now = Instant::now();
        for _ in 0..10 {
            rl.allow_at("a", now);
        }
        assert!(!rl.allow_at("a", now));
        assert!(rl.allow_at("b", now));
        assert_eq!(rl.entry("b").unwrap().count, 1);
    }

    #[test]
    fn test_window_resets_only_after_reset_time_passes() {
        let rl = limiter();
        let start = Instant::now();
        for _ in 0..10 {
            rl.allow_at("a", start);
        }
        let reset_at = start + Duration::from_secs(60);
        // Exactly at the boundary the old window still applies.
        assert!(!rl.allow_at("a", reset_at));

        let later = reset_at + Duration::from_millis(1);
        assert!(rl.allow_at("a", later));
        let entry = rl.entry("a").unwrap();
        assert_eq!(entry.count, 1);
        assert_eq!(entry.window_reset_at, later + Duration::from_secs(60));
    }

    #[test]
    fn test_custom_cap_respected() {
        let rl = RateLimiter::new(RateLimitConfig {
            window: Duration::from_secs(5),
            max_requests: 2,
        });
        let now = Instant::now();
        assert!(rl.allow_at("a", now));
        assert!(rl.allow_at("a", now));
        assert!(!rl.allow_at("a", now));
    }

    #[test]
    fn test_concurrent_requests_never_exceed_cap() {
        let rl = limiter();
        let now = Instant::now();
        let allowed = std::sync::atomic::AtomicU32::new(0);

        std::thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    for _ in 0..4 {
                        if rl.allow_at("shared", now) {
                            allowed.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                        }
                    }
                });
            }
        });

        assert_eq!(allowed.into_inner(), 10);
        assert_eq!(rl.entry("shared").unwrap().count, 10);
    }

    #[test]
    fn test_sweep_removes_only_expired_entries() {
        let rl = limiter();
        let start = Instant::now();
        rl.allow_at("old", start);
        rl.allow_at("new", start + Duration::from_secs(45));

        let removed = rl.sweep_expired(start + Duration::from_secs(61));
        assert_eq!(removed, 1);
        assert!(rl.entry("old").is_none());
        assert!(rl.entry("new").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_task_evicts_stale_clients() {
        let rl = Arc::new(limiter());
        rl.allow("visitor");
        let handle = spawn_sweeper(Arc::clone(&rl), Duration::from_secs(120));

        tokio::time::sleep(Duration::from_secs(121)).await;
        tokio::task::yield_now().await;

        assert_eq!(rl.len(), 0);
        handle.abort();
    }
}
