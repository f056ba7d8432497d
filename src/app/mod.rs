//! Application core — the deployment loop and its boundaries, zero direct I/O.
//!
//! All interaction with probes, models, the clock and the log happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable with scripted adapters.

pub mod events;
pub mod ports;
pub mod report;
pub mod service;
