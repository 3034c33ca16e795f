//! Cache Module
//!
//! Provides an in-memory byte cache with sweep-driven TTL expiration.

mod entry;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use store::TtlCache;

pub(crate) use store::CacheShared;
