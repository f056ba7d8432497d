//! Eco-Guard field deployment library.
//!
//! Exposes the deployment loop, its ports and adapters, and the simulated
//! probe and classifier for integration testing and external inspection.
//! The binary in `main.rs` only wires these together.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fsm;
pub mod sensors;
pub mod shutdown;
