//! Process interrupt adapter.
//!
//! Routes SIGINT (Ctrl+C) and SIGTERM to a [`ShutdownSignal`].  `ctrlc`
//! runs the handler on its own thread, so raising the atomic flag is all
//! it does.

use log::debug;

use crate::shutdown::ShutdownSignal;

/// Install the process-wide interrupt handler.  May only succeed once
/// per process.
pub fn install_interrupt_handler(signal: &ShutdownSignal) -> Result<(), ctrlc::Error> {
    let signal = signal.clone();
    ctrlc::set_handler(move || {
        debug!("Interrupt received, requesting shutdown");
        signal.trigger();
    })
}
