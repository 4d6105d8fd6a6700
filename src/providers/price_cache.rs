use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

/// Expiry used when `now + ttl` is not representable
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy)]
struct CachedPrice {
    price: f64,
    expires_at: Instant,
}

/// Thread-safe, time-bounded cache of USD prices keyed by mint.
///
/// Each entry is written as a single value under its shard's write lock, so a
/// reader sees either the old (price, expiry) pair or the new one. Expired
/// entries are reported as misses and stay in place until the next `set`.
#[derive(Debug, Default)]
pub struct PriceCache {
    entries: DashMap<String, CachedPrice>,
}

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached price for `mint`, or `None` if absent or expired
    pub fn get(&self, mint: &str) -> Option<f64> {
        let entry = self.entries.get(mint)?;
        if Instant::now() >= entry.expires_at {
            return None;
        }
        Some(entry.price)
    }

    /// Store a price, replacing any previous entry for `mint`
    pub fn set(&self, mint: &str, price: f64, ttl: Duration) {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);

        self.entries.insert(mint.to_string(), CachedPrice { price, expires_at });
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
