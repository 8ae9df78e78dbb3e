//! Fixed-interval throttle for courtesy rate limiting
//!
//! The data source has no published limits, so consecutive team schedule
//! fetches are spaced by a minimum delay.

use std::num::NonZeroU32;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

/// Allows one call per `interval`; the first call passes immediately.
pub struct Throttle {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    interval: Duration,
}

impl Throttle {
    /// Create a throttle. A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        let quota = Quota::with_period(interval)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(NonZeroU32::MIN);

        Self {
            limiter: RateLimiter::direct(quota),
            interval,
        }
    }

    /// Wait until the next call is allowed
    pub async fn wait(&self) {
        if self.limiter.check().is_err() {
            debug!("Throttling for up to {:?}", self.interval);
            self.limiter.until_ready().await;
        }
    }
}
