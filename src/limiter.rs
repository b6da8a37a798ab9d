// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed-window permit limiter for outbound registry requests.
//!
//! At most `max_permits` permits are granted per window. The first acquire
//! after a window has elapsed opens a new window and is always granted.
//! Released permits return capacity to the current window.
//!
//! Because windows reset rather than slide, up to `2 * max_permits`
//! requests can pass around a window boundary.

use crate::clock::{Clock, SystemClock};
use crate::config::RateLimitConfig;
use crate::error::ConfigError;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Mutable window bookkeeping, always read and written under one lock.
#[derive(Debug, Default)]
struct WindowState {
    /// Start of the current window; `None` until the first acquire
    window_start: Option<Instant>,
    /// Permits outstanding in the current window
    granted: u32,
}

/// Thread-safe permit limiter.
pub struct RateLimiter {
    window: Duration,
    max_permits: u32,
    clock: Box<dyn Clock>,
    state: Mutex<WindowState>,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("window", &self.window)
            .field("max_permits", &self.max_permits)
            .field("state", &*self.lock())
            .finish()
    }
}

impl RateLimiter {
    /// Create a limiter granting `max_permits` per `window` on the system clock.
    pub fn new(window: Duration, max_permits: u32) -> Result<Self, ConfigError> {
        Self::with_clock(window, max_permits, SystemClock)
    }

    /// Create a limiter reading time from `clock`.
    pub fn with_clock(
        window: Duration,
        max_permits: u32,
        clock: impl Clock + 'static,
    ) -> Result<Self, ConfigError> {
        if max_permits == 0 {
            return Err(ConfigError::InvalidMaxPermits(max_permits));
        }
        if window.as_millis() == 0 {
            return Err(ConfigError::InvalidWindow(window));
        }

        Ok(Self {
            window,
            max_permits,
            clock: Box::new(clock),
            state: Mutex::new(WindowState::default()),
        })
    }

    /// Create a limiter from configuration.
    pub fn from_config(config: &RateLimitConfig) -> Result<Self, ConfigError> {
        Self::new(config.window_duration(), config.max_permits)
    }

    // The state is two integers updated together, so a panic elsewhere
    // cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, WindowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Try to take a permit. Returns `false` without blocking when the
    /// current window is exhausted.
    ///
    /// Every `true` must be paired with exactly one [`release`](Self::release).
    pub fn try_acquire(&self) -> bool {
        let now = self.clock.now();
        let mut state = self.lock();

        let elapsed = match state.window_start {
            Some(start) => now.saturating_duration_since(start) >= self.window,
            None => true,
        };

        if elapsed {
            state.window_start = Some(now);
            state.granted = 1;
            return true;
        }

        if state.granted < self.max_permits {
            state.granted += 1;
            true
        } else {
            debug!(
                granted = state.granted,
                max_permits = self.max_permits,
                "Permit denied, window exhausted"
            );
            false
        }
    }

    /// Return a permit to the current window.
    ///
    /// Saturates at zero: releasing a permit granted in an earlier window
    /// after a reset never drives the count negative.
    pub fn release(&self) {
        let mut state = self.lock();
        state.granted = state.granted.saturating_sub(1);
    }

    /// Take a permit that is released when the returned guard drops.
    pub fn try_permit(&self) -> Option<Permit<'_>> {
        // Build the guard only after a grant; a dropped guard releases.
        self.try_acquire().then(|| Permit { limiter: self })
    }

    /// Permits granted per window.
    pub fn max_permits(&self) -> u32 {
        self.max_permits
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Permits currently outstanding in the window.
    pub fn granted(&self) -> u32 {
        self.lock().granted
    }

    /// Time left until the current window elapses.
    pub fn time_until_reset(&self) -> Duration {
        let now = self.clock.now();
        match self.lock().window_start {
            Some(start) => self.window.saturating_sub(now.saturating_duration_since(start)),
            None => Duration::ZERO,
        }
    }
}

/// A granted permit. Dropping it calls [`RateLimiter::release`] once.
#[must_use = "dropping a permit releases it immediately"]
#[derive(Debug)]
pub struct Permit<'a> {
    limiter: &'a RateLimiter,
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.limiter.release();
    }
}
