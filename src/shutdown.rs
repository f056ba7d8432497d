//! Interrupt-driven shutdown signal.
//!
//! The interrupt handler (see [`adapters::signal`](crate::adapters::signal))
//! raises the flag from its own thread; the deployment loop polls it at
//! the top of every iteration, before emitting a report, and between
//! pause slices.
//!
//! ```text
//! ┌──────────────┐  trigger()  ┌────────────────┐  is_triggered()  ┌────────────┐
//! │ SIGINT/TERM  │────────────▶│ ShutdownSignal │◀─────────────────│ Main loop  │
//! │ handler      │             │ (AtomicBool)   │                  │ / pacer    │
//! └──────────────┘             └────────────────┘                  └────────────┘
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable, lock-free shutdown flag.  Once raised it stays raised.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    raised: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown.  Safe to call from any thread, any number of times.
    pub fn trigger(&self) {
        self.raised.store(true, Ordering::Release);
    }

    pub fn is_triggered(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}
