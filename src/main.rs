//! Eco-Guard field deployment unit — main entry point.
//!
//! Wires the simulated adapters into the deployment loop and runs it until
//! Ctrl+C / SIGTERM.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │  SimulatedProbe   SimulatedClassifier   ThreadPacer          │
//! │  (SensorPort)     (ClassifierPort)      (PacerPort)          │
//! │  LogEventSink     ctrlc handler ─▶ ShutdownSignal            │
//! │  (EventSink)                                                 │
//! │  ─────────────── Port Trait Boundary ───────────────         │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │         DeploymentLoop (RUNNING / SHUTTING_DOWN)   │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use ecoguard::adapters::log_sink::LogEventSink;
use ecoguard::adapters::signal::install_interrupt_handler;
use ecoguard::adapters::time::ThreadPacer;
use ecoguard::app::events::DeploymentEvent;
use ecoguard::app::ports::EventSink;
use ecoguard::app::service::DeploymentLoop;
use ecoguard::classifier::simulated::SimulatedClassifier;
use ecoguard::config::DeploymentConfig;
use ecoguard::diagnostics::{self, LogConfig};
use ecoguard::sensors::simulated::SimulatedProbe;
use ecoguard::shutdown::ShutdownSignal;

fn main() -> ExitCode {
    if let Err(e) = diagnostics::init_logging(&LogConfig::default()) {
        eprintln!("logger init failed: {e}");
        return ExitCode::FAILURE;
    }
    diagnostics::install_panic_handler();

    match run() {
        Ok(code) => code,
        Err(e) => {
            // Setup failed before the loop could take over its own reporting.
            error!("[CRITICAL] Error in deployment loop: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    info!("Eco-Guard field unit v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Configuration ──────────────────────────────────────
    let config = DeploymentConfig::default();
    config.validate().context("deployment config rejected")?;
    debug!("Effective config: {}", serde_json::to_string(&config)?);

    // ── 2. Interrupt handling ─────────────────────────────────
    let shutdown = ShutdownSignal::new();
    install_interrupt_handler(&shutdown).context("installing interrupt handler")?;

    let mut sink = LogEventSink::new();
    sink.emit(&DeploymentEvent::PoweredUp {
        site: config.site_name.clone(),
        uptime_target_percent: config.uptime_target_percent,
    });

    // ── 3. Adapters ───────────────────────────────────────────
    let probe = SimulatedProbe::new(&config, StdRng::from_entropy());
    let classifier = SimulatedClassifier::new(&config.classifier, StdRng::from_entropy())
        .context("initialising biological indicator engine")?;
    sink.emit(&DeploymentEvent::ClassifierReady);
    let pacer = ThreadPacer::from_millis(config.shutdown_poll_ms);

    // ── 4. Loop ───────────────────────────────────────────────
    let mut deployment = DeploymentLoop::new(&config, probe, classifier, pacer, shutdown);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = deployment.run(&mut out, &mut sink);

    Ok(if outcome.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
