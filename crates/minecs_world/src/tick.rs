//! Fixed-timestep run loop.
//!
//! [`World::process`] runs exactly one tick. [`World::run`] drives it at a
//! target rate for a bounded (or unbounded) number of ticks, sleeping off any
//! time left in each tick's budget.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::error::WorldError;
use crate::world::World;

/// Configuration for [`World::run`].
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Target ticks per second.
    pub tick_rate: f64,
    /// Maximum number of ticks to run (0 = unlimited).
    pub max_ticks: u64,
}

impl TickConfig {
    /// Run `max_ticks` ticks at `tick_rate` Hz.
    #[must_use]
    pub fn new(tick_rate: f64, max_ticks: u64) -> Self {
        Self {
            tick_rate,
            max_ticks,
        }
    }

    /// Time budget of a single tick. A rate of `0` means no budget: ticks run
    /// back to back.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidTickRate`] for negative or non-finite
    /// rates, and for rates so small that the period overflows a [`Duration`].
    pub fn tick_duration(&self) -> Result<Duration, WorldError> {
        let rate = self.tick_rate;
        if rate == 0.0 {
            return Ok(Duration::ZERO);
        }
        if !rate.is_finite() || rate < 0.0 {
            return Err(WorldError::InvalidTickRate { rate });
        }
        Duration::try_from_secs_f64(rate.recip()).map_err(|_| WorldError::InvalidTickRate { rate })
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            max_ticks: 0,
        }
    }
}

impl World {
    /// Run ticks at the configured rate until `max_ticks` have completed.
    ///
    /// With `max_ticks == 0` the loop only ends when a system fails. Returns
    /// the number of ticks completed by this call.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidTickRate`] before the first tick if the
    /// rate is unusable, otherwise the first [`WorldError`] raised by
    /// [`World::process`].
    pub fn run(&mut self, config: &TickConfig) -> Result<u64, WorldError> {
        let tick_duration = config.tick_duration()?;
        let mut tick_count = 0u64;

        info!(
            tick_rate = config.tick_rate,
            max_ticks = config.max_ticks,
            "starting tick loop"
        );

        loop {
            let start = Instant::now();

            self.process()?;

            tick_count += 1;
            if config.max_ticks > 0 && tick_count >= config.max_ticks {
                info!(ticks = tick_count, "tick loop complete");
                return Ok(tick_count);
            }

            let elapsed = start.elapsed();
            if elapsed < tick_duration {
                std::thread::sleep(tick_duration - elapsed);
            } else if !tick_duration.is_zero() {
                warn!(
                    tick_id = self.tick_id(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = tick_duration.as_millis() as u64,
                    "tick exceeded time budget"
                );
            }
        }
    }
}
