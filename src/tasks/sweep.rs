//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheShared;

/// Shortest period the sweep timer will tick at.
const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns the task that sweeps a cache every `ttl`.
///
/// The first sweep happens one full period after this call. Each sweep
/// holds the cache lock for the whole pass, so callers never observe a
/// partially swept map. The task holds only a weak reference and exits at
/// the first tick after the last cache handle is dropped.
///
/// A zero ttl still sweeps, at `MIN_SWEEP_PERIOD`. A ttl too large to place
/// on the clock never comes due, so no sweep is scheduled and entries stay.
pub(crate) fn spawn_sweep_task(cache: Weak<CacheShared>, ttl: Duration) -> JoinHandle<()> {
    let period = ttl.max(MIN_SWEEP_PERIOD);
    let Some(start) = Instant::now().checked_add(period) else {
        return tokio::spawn(async move {
            debug!("TTL sweep: period {:?} is beyond the clock, not sweeping", period);
        });
    };

    tokio::spawn(async move {
        debug!("Starting TTL sweep task with period of {:?}", period);

        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(cache) = cache.upgrade() else {
                debug!("TTL sweep: cache dropped, stopping");
                break;
            };

            let removed = cache.remove_expired(Instant::now());

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
