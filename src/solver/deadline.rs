//! Wall-clock time limit for long searches.

use std::time::{Duration, Instant};

use crate::error::{Result, RouteError};

/// Number of [`Deadline::check`] calls between clock reads.
const CHECK_INTERVAL: u32 = 1024;

/// Tracks elapsed time for one solve and enforces an optional limit.
///
/// The clock is read only every `CHECK_INTERVAL` calls to
/// [`check`](Self::check), so it is cheap enough for the innermost search
/// loop.
///
/// # Examples
///
/// ```
/// use u_turnroute::solver::Deadline;
///
/// let mut unlimited = Deadline::from_millis(0);
/// assert!(unlimited.check().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
    calls: u32,
}

impl Deadline {
    /// A deadline `ms` milliseconds from now; 0 means no limit.
    pub fn from_millis(ms: u64) -> Self {
        Self {
            start: Instant::now(),
            limit: (ms > 0).then(|| Duration::from_millis(ms)),
            calls: 0,
        }
    }

    /// A deadline that never expires.
    pub fn unlimited() -> Self {
        Self::from_millis(0)
    }

    /// Fails with [`RouteError::TimeLimitExceeded`] once the limit has
    /// passed.
    #[inline]
    pub fn check(&mut self) -> Result<()> {
        let Some(limit) = self.limit else {
            return Ok(());
        };
        self.calls = self.calls.wrapping_add(1);
        if self.calls % CHECK_INTERVAL != 0 {
            return Ok(());
        }
        self.check_now(limit)
    }

    /// Like [`check`](Self::check) but always reads the clock. Used between
    /// coarse-grained units of work such as greedy restarts.
    pub fn check_coarse(&mut self) -> Result<()> {
        match self.limit {
            Some(limit) => self.check_now(limit),
            None => Ok(()),
        }
    }

    /// Milliseconds since this deadline was created.
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn check_now(&self, limit: Duration) -> Result<()> {
        let elapsed = self.start.elapsed();
        if elapsed >= limit {
            let elapsed_ms = elapsed.as_millis() as u64;
            log::warn!("search aborted: time limit of {} ms exceeded", limit.as_millis());
            return Err(RouteError::TimeLimitExceeded { elapsed_ms });
        }
        Ok(())
    }
}
