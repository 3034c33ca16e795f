//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored value together with the instant it was written.
///
/// Entries are never mutated in place; an overwrite replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// When the entry was inserted or last overwritten
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how old the entry is at `now`.
    ///
    /// Saturates to zero if `now` is earlier than `created_at`.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl` at `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still live.
    /// It only becomes eligible for removal once its age exceeds `ttl`.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}
