//! Unified error types for the deployment loop.
//!
//! Two families are kept apart:
//!
//! - [`ClassifierError`] — raised by the indicator classifier.  Recovered
//!   per iteration by the loop, never propagated.
//! - [`Error`] — a *loop fault*.  Anything else that goes wrong in the
//!   loop's own logic (reading generation, report output, pacing,
//!   configuration).  Fatal to the run.
//!
//! There is no `From<ClassifierError> for Error`: a classifier failure can
//! only reach the outer boundary if someone converts it by hand.

use core::fmt;

// ---------------------------------------------------------------------------
// Loop fault
// ---------------------------------------------------------------------------

/// Every fatal failure of the deployment loop funnels into this type.
#[derive(Debug)]
pub enum Error {
    /// The physico-chemical probe could not produce a reading.
    Sensor(SensorError),
    /// Writing the field report to its output stream failed.
    Report(std::io::Error),
    /// The pacer could not suspend until the next sample.
    Timer(String),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Report(e) => write!(f, "report output: {e}"),
            Self::Timer(msg) => write!(f, "timer: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sensor(e) => Some(e),
            Self::Report(e) => Some(e),
            Self::Timer(_) | Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Report(e)
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum SensorError {
    /// The probe failed to deliver a value.
    ReadFailed(String),
    /// The probe is still settling after power-up.
    WarmingUp,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "read failed: {msg}"),
            Self::WarmingUp => write!(f, "probe warming up"),
        }
    }
}

impl std::error::Error for SensorError {}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Classifier errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// Inference was requested before a model was loaded.
    ModelNotLoaded,
    /// The payload could not be interpreted as sensor imagery.
    InvalidPayload(String),
    /// The inference backend failed.
    Inference(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelNotLoaded => write!(f, "model not loaded"),
            Self::InvalidPayload(msg) => write!(f, "invalid payload: {msg}"),
            Self::Inference(msg) => write!(f, "inference failed: {msg}"),
        }
    }
}

impl std::error::Error for ClassifierError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Loop-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
