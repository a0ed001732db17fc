use crate::{Result as WsErrorResult, WsError};

use sf_config::RateLimitConfig;
use sf_core::ErrorLocation;

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};

/// Per-session limiter for frames a subscriber relays onto the bus.
///
/// Allows a burst of `max_requests`, refilling one slot every
/// `window_secs / max_requests`.
pub struct RelayRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    config: RateLimitConfig,
}

impl RelayRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::direct(quota),
            config,
        }
    }

    #[track_caller]
    pub fn check(&self) -> WsErrorResult<()> {
        self.limiter
            .check()
            .map_err(|_| WsError::RelayRateLimited {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Factory for creating per-session relay limiters
#[derive(Clone)]
pub struct RelayRateLimiterFactory {
    config: RateLimitConfig,
}

impl RelayRateLimiterFactory {
    pub fn new(config: RateLimitConfig) -> Self {
        Self { config }
    }

    pub fn create(&self) -> RelayRateLimiter {
        RelayRateLimiter::new(self.config.clone())
    }
}

impl Default for RelayRateLimiterFactory {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
