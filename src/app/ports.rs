//! Port traits — the hexagonal boundary between the deployment loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DeploymentLoop (domain)
//! ```
//!
//! Probes, classifiers, pacers and event sinks implement these traits.
//! The [`DeploymentLoop`](super::service::DeploymentLoop) consumes them via
//! generics, so the loop never touches hardware, models or the clock
//! directly.

use std::time::Duration;

use crate::classifier::Detection;
use crate::error::{ClassifierError, Error, SensorError};
use crate::sensors::SampleReading;
use crate::shutdown::ShutdownSignal;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: probe → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the loop calls this once per iteration.
pub trait SensorPort {
    /// Produce a fresh physico-chemical reading.  A failure here is a
    /// loop fault.
    fn sample(&mut self) -> Result<SampleReading, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Classifier port (driven adapter: model → domain)
// ───────────────────────────────────────────────────────────────

/// Biological indicator classifier.
///
/// `payload` is opaque sensor imagery and may be absent; implementations
/// must not fail merely because it is `None`.  Errors are classifier
/// faults and are isolated by the caller.
pub trait ClassifierPort {
    fn classify(&mut self, payload: Option<&[u8]>) -> Result<Detection, ClassifierError>;
}

// ───────────────────────────────────────────────────────────────
// Pacer port (driven adapter: domain → clock)
// ───────────────────────────────────────────────────────────────

/// Suspends the loop between samples.
pub trait PacerPort {
    /// Wait for `interval`, returning early once `shutdown` is raised.
    fn pause(&mut self, interval: Duration, shutdown: &ShutdownSignal) -> Result<(), Error>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The loop emits structured [`DeploymentEvent`](super::events::DeploymentEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::DeploymentEvent);
}

// ───────────────────────────────────────────────────────────────
// Borrowed adapters
// ───────────────────────────────────────────────────────────────
//
// Let callers lend an adapter to the loop and inspect it afterwards.

impl<T: SensorPort + ?Sized> SensorPort for &mut T {
    fn sample(&mut self) -> Result<SampleReading, SensorError> {
        (**self).sample()
    }
}

impl<T: ClassifierPort + ?Sized> ClassifierPort for &mut T {
    fn classify(&mut self, payload: Option<&[u8]>) -> Result<Detection, ClassifierError> {
        (**self).classify(payload)
    }
}

impl<T: PacerPort + ?Sized> PacerPort for &mut T {
    fn pause(&mut self, interval: Duration, shutdown: &ShutdownSignal) -> Result<(), Error> {
        (**self).pause(interval, shutdown)
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &super::events::DeploymentEvent) {
        (**self).emit(event);
    }
}
