//! Physico-chemical sensing — the [`SampleReading`] type and probe drivers.
//!
//! Probes implement [`SensorPort`](crate::app::ports::SensorPort) and
//! produce one reading per loop iteration.  The only driver today is
//! [`simulated::SimulatedProbe`].

pub mod simulated;

/// One iteration's physico-chemical measurement triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleReading {
    /// Acidity (pH units).
    pub ph: f64,
    /// Turbidity in NTU.
    pub turbidity_ntu: f64,
    /// Nitrogen concentration in mg/L.
    pub nitrogen_mg_l: f64,
}

/// Round `value` to `places` decimal places (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
