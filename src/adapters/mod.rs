//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                      |
//! |------------|--------------|----------------------------------|
//! | `log_sink` | EventSink    | `log` facade (stderr)            |
//! | `time`     | PacerPort    | `std::thread::sleep` + `Instant` |
//! | `signal`   | —            | SIGINT / SIGTERM via `ctrlc`     |

pub mod log_sink;
pub mod signal;
pub mod time;
