//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the lifetime of a cache.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries once per ttl period

mod sweep;

pub(crate) use sweep::spawn_sweep_task;
