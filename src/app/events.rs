//! Outbound deployment events.
//!
//! The [`DeploymentLoop`](super::service::DeploymentLoop) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  The log
//! adapter turns them into diagnostic lines; tests record them.

use crate::error::ClassifierError;
use crate::fsm::LoopState;

/// Structured events emitted by the deployment loop.
#[derive(Debug, Clone, PartialEq)]
pub enum DeploymentEvent {
    /// The unit is powered and about to initialise.
    PoweredUp { site: String, uptime_target_percent: u8 },

    /// The indicator classifier is ready.
    ClassifierReady,

    /// The classifier failed on sample `sample`; a sentinel was reported.
    ClassifierFault { sample: u64, error: ClassifierError },

    /// The loop moved between states.
    StateChanged { from: LoopState, to: LoopState },

    /// The loop shut down after an interrupt.
    Shutdown(RunSummary),

    /// A loop fault ended the run.  `detail` carries the full source chain.
    LoopFault { message: String, detail: String },
}

/// Totals for one run of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations started (the counter value when the loop stopped).
    pub samples_collected: u64,
    /// Iterations whose classification was replaced by the sentinel.
    pub classifier_faults: u64,
    pub final_state: LoopState,
}
