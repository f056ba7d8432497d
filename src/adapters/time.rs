//! Host pacer adapter.
//!
//! Sleeps between samples in short slices so an interrupt cuts the pause
//! short instead of waiting out the full interval.

use std::time::{Duration, Instant};

use crate::app::ports::PacerPort;
use crate::error::{Error, Result};
use crate::shutdown::ShutdownSignal;

/// Pacer backed by `std::thread::sleep` and a monotonic clock.
#[derive(Debug, Clone)]
pub struct ThreadPacer {
    slice: Duration,
}

impl ThreadPacer {
    pub fn new(slice: Duration) -> Self {
        Self { slice }
    }

    pub fn from_millis(slice_ms: u64) -> Self {
        Self::new(Duration::from_millis(slice_ms))
    }
}

impl PacerPort for ThreadPacer {
    fn pause(&mut self, interval: Duration, shutdown: &ShutdownSignal) -> Result<()> {
        if self.slice.is_zero() {
            return Err(Error::Timer("pause slice must be non-zero".to_string()));
        }

        let deadline = Instant::now() + interval;
        loop {
            if shutdown.is_triggered() {
                return Ok(());
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            std::thread::sleep(self.slice.min(deadline - now));
        }
    }
}
