//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing deployment events to the `log`
//! facade, which the binary routes to stderr.  Report lines never pass
//! through here; they go to stdout.

use log::{error, info};

use crate::app::events::DeploymentEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`DeploymentEvent`] as a diagnostic line.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DeploymentEvent) {
        match event {
            DeploymentEvent::PoweredUp { site, uptime_target_percent } => {
                info!("[POWER] Solar-Powered Monitoring Unit Active: {}", site);
                info!("[UPTIME] Target: {}% operational availability", uptime_target_percent);
            }
            DeploymentEvent::ClassifierReady => {
                info!("[INIT] Biological Indicator Engine Initialized...");
            }
            DeploymentEvent::ClassifierFault { sample, error } => {
                error!("Biological detection failed: {} (sample #{})", error, sample);
            }
            DeploymentEvent::StateChanged { from, to } => {
                info!("[STATE] {} -> {}", from, to);
            }
            DeploymentEvent::Shutdown(summary) => {
                info!(
                    "[SHUTDOWN] Unit Powering Down Safely. [Total samples collected: {}]",
                    summary.samples_collected
                );
                if summary.classifier_faults > 0 {
                    info!(
                        "[SHUTDOWN] Biological detection faults this run: {}",
                        summary.classifier_faults
                    );
                }
            }
            DeploymentEvent::LoopFault { detail, .. } => {
                error!("[CRITICAL] Error in deployment loop: {}", detail);
            }
        }
    }
}
