//! Two-state lifecycle of the deployment loop.
//!
//! ```text
//!  ┌─────────┐  iteration done, no interrupt
//!  │ RUNNING │◀───────────────┐
//!  └────┬────┴────────────────┘
//!       │ interrupt observed
//!       ▼
//!  ┌───────────────┐
//!  │ SHUTTING_DOWN │  (terminal: log summary, stop)
//!  └───────────────┘
//! ```
//!
//! RUNNING is both the initial and the only steady state.  A loop fault
//! does not pass through SHUTTING_DOWN; it leaves the loop from RUNNING.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LoopState {
    Running = 0,
    ShuttingDown = 1,
}

impl LoopState {
    pub const INITIAL: LoopState = LoopState::Running;

    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::ShuttingDown => "ShuttingDown",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::ShuttingDown)
    }

    /// Next state given whether an interrupt has been observed.
    /// SHUTTING_DOWN never leaves.
    pub const fn next(self, interrupt_observed: bool) -> Self {
        match self {
            Self::Running if interrupt_observed => Self::ShuttingDown,
            Self::Running => Self::Running,
            Self::ShuttingDown => Self::ShuttingDown,
        }
    }
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
