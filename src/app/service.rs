//! Deployment loop — the hexagonal core.
//!
//! [`DeploymentLoop`] owns the iteration counter and the loop state and
//! drives one probe, one classifier and one pacer through their ports.
//!
//! ```text
//!  SensorPort ───▶ ┌──────────────────────────┐ ──▶ report stream (stdout)
//!                  │      DeploymentLoop       │
//! ClassifierPort ─▶│  RUNNING ─▶ SHUTTING_DOWN │ ──▶ EventSink (log)
//!                  └──────────────────────────┘
//!  PacerPort ◀─────────────┘
//! ```
//!
//! Two nested boundaries decide whether a failure is survivable:
//!
//! - the **inner** boundary wraps exactly the `classify` call; a
//!   [`ClassifierError`](crate::error::ClassifierError) is logged and
//!   replaced with the sentinel, and the loop carries on;
//! - the **outer** boundary ([`DeploymentLoop::run`]) wraps the whole run;
//!   any [`Error`] reaching it is reported with its full source chain and
//!   the run ends.  It never retries.

use std::io::Write;
use std::time::Duration;

use log::debug;

use crate::config::DeploymentConfig;
use crate::error::{Error, Result};
use crate::fsm::LoopState;

use super::events::{DeploymentEvent, RunSummary};
use super::ports::{ClassifierPort, EventSink, PacerPort, SensorPort};
use super::report::{DetectionOutcome, FieldReport};
use crate::shutdown::ShutdownSignal;

/// How a supervised run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Interrupted and shut down cleanly.
    Shutdown(RunSummary),
    /// A loop fault ended the run.
    Faulted(RunSummary),
}

impl RunOutcome {
    pub fn summary(&self) -> RunSummary {
        match self {
            Self::Shutdown(s) | Self::Faulted(s) => *s,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Shutdown(_))
    }
}

/// The deployment loop orchestrates sampling, classification and reporting.
pub struct DeploymentLoop<S, C, P> {
    probe: S,
    classifier: C,
    pacer: P,
    shutdown: ShutdownSignal,
    interval: Duration,
    state: LoopState,
    sample_count: u64,
    classifier_faults: u64,
}

impl<S, C, P> DeploymentLoop<S, C, P>
where
    S: SensorPort,
    C: ClassifierPort,
    P: PacerPort,
{
    pub fn new(
        config: &DeploymentConfig,
        probe: S,
        classifier: C,
        pacer: P,
        shutdown: ShutdownSignal,
    ) -> Self {
        Self {
            probe,
            classifier,
            pacer,
            shutdown,
            interval: Duration::from_secs(config.sample_interval_secs),
            state: LoopState::INITIAL,
            sample_count: 0,
            classifier_faults: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Run until interrupted or until a loop fault, whichever comes first.
    ///
    /// This is the outer boundary: a loop fault is emitted as
    /// [`DeploymentEvent::LoopFault`] with its full diagnostic chain and
    /// the run ends.  A clean shutdown emits [`DeploymentEvent::Shutdown`].
    pub fn run(&mut self, out: &mut impl Write, sink: &mut impl EventSink) -> RunOutcome {
        match self.run_until_shutdown(out, sink) {
            Ok(summary) => {
                sink.emit(&DeploymentEvent::Shutdown(summary));
                RunOutcome::Shutdown(summary)
            }
            Err(e) => {
                let message = e.to_string();
                let detail = format!("{:?}", anyhow::Error::new(e));
                sink.emit(&DeploymentEvent::LoopFault { message, detail });
                RunOutcome::Faulted(self.summary())
            }
        }
    }

    /// Drive RUNNING iterations until SHUTTING_DOWN.  Loop faults are
    /// returned to the caller untouched.
    pub fn run_until_shutdown(
        &mut self,
        out: &mut impl Write,
        sink: &mut impl EventSink,
    ) -> Result<RunSummary> {
        while !self.state.is_terminal() {
            self.step(out, sink)?;
        }
        Ok(self.summary())
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one iteration: count → read → classify → report → pause.
    ///
    /// The interrupt is observed at the top of the iteration and again
    /// just before the report, so nothing is printed once it has been
    /// seen.  The pacer returns early on interrupt; the next call then
    /// observes it at the top.
    pub fn step(&mut self, out: &mut impl Write, sink: &mut impl EventSink) -> Result<LoopState> {
        if self.observe_interrupt(sink) {
            return Ok(self.state);
        }

        // 1. Count
        self.sample_count += 1;

        // 2. Physico-chemical reading (fault here is fatal)
        let reading = self.probe.sample()?;

        // 3. Biological classification (fault here is recovered)
        let detection = self.detect(sink);

        if self.observe_interrupt(sink) {
            return Ok(self.state);
        }

        // 4. Field report
        let report = FieldReport {
            sample: self.sample_count,
            reading,
            detection,
        };
        report.write_to(out).map_err(Error::Report)?;

        // 5. Pace
        self.pacer.pause(self.interval, &self.shutdown)?;

        Ok(self.state)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Iterations started so far.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn classifier_faults(&self) -> u64 {
        self.classifier_faults
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            samples_collected: self.sample_count,
            classifier_faults: self.classifier_faults,
            final_state: self.state,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Inner boundary: scoped to the classification call only.
    fn detect(&mut self, sink: &mut impl EventSink) -> DetectionOutcome {
        match self.classifier.classify(None) {
            Ok(detection) => DetectionOutcome::Detected(detection),
            Err(error) => {
                self.classifier_faults += 1;
                sink.emit(&DeploymentEvent::ClassifierFault {
                    sample: self.sample_count,
                    error,
                });
                DetectionOutcome::Failed
            }
        }
    }

    /// Apply the interrupt flag to the state machine.  Returns `true` once
    /// the loop is in its terminal state.
    fn observe_interrupt(&mut self, sink: &mut impl EventSink) -> bool {
        let next = self.state.next(self.shutdown.is_triggered());
        if next != self.state {
            debug!("Loop transition: {} -> {}", self.state, next);
            sink.emit(&DeploymentEvent::StateChanged {
                from: self.state,
                to: next,
            });
            self.state = next;
        }
        self.state.is_terminal()
    }
}
