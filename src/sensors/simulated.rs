//! Simulated physico-chemical probe.
//!
//! Draws each field independently and uniformly from its configured
//! bounds, then rounds to the configured precision.  Rounding can step a
//! hair outside a bound that is not itself on the precision grid, so the
//! rounded value is clamped back in.

use rand::Rng;

use super::{SampleReading, round_to};
use crate::app::ports::SensorPort;
use crate::config::{Bounds, DeploymentConfig};
use crate::error::SensorError;

pub struct SimulatedProbe<R> {
    rng: R,
    ph: Bounds,
    turbidity_ntu: Bounds,
    nitrogen_mg_l: Bounds,
    precision: u32,
}

impl<R: Rng> SimulatedProbe<R> {
    /// Construct from a validated config.
    pub fn new(config: &DeploymentConfig, rng: R) -> Self {
        Self {
            rng,
            ph: config.ph,
            turbidity_ntu: config.turbidity_ntu,
            nitrogen_mg_l: config.nitrogen_mg_l,
            precision: config.reading_precision,
        }
    }

    fn draw(&mut self, bounds: Bounds) -> f64 {
        let raw = self.rng.gen_range(bounds.min..=bounds.max);
        round_to(raw, self.precision).clamp(bounds.min, bounds.max)
    }
}

impl<R: Rng> SensorPort for SimulatedProbe<R> {
    fn sample(&mut self) -> Result<SampleReading, SensorError> {
        let ph = self.draw(self.ph);
        let turbidity_ntu = self.draw(self.turbidity_ntu);
        let nitrogen_mg_l = self.draw(self.nitrogen_mg_l);
        Ok(SampleReading { ph, turbidity_ntu, nitrogen_mg_l })
    }
}
