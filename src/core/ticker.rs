//! Cancellable repeating task that samples the clock on a fixed period.

use chrono::{Local, NaiveDateTime};
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Period used by the live countdown.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct Ticker {
    period: Duration,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            clock: local_now,
        }
    }

    /// Replace the clock source (tests use a fixed clock).
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Call `on_tick` immediately and then once per period until the token is
    /// cancelled or the callback breaks. Returns the number of ticks delivered.
    pub async fn run<F>(&self, token: CancellationToken, mut on_tick: F) -> u64
    where
        F: FnMut(NaiveDateTime) -> ControlFlow<()>,
    {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut ticks = 0;
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(ticks, "ticker cancelled");
                    break;
                }
                _ = interval.tick() => {
                    ticks += 1;
                    if on_tick((self.clock)()).is_break() {
                        tracing::debug!(ticks, "ticker stopped by callback");
                        break;
                    }
                }
            }
        }
        ticks
    }
}
