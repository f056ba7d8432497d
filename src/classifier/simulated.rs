//! Stand-in indicator classifier.
//!
//! Ignores its payload and draws a label from the configured categorical
//! distribution and a confidence from the configured band.  The random
//! source is injected so tests can seed it; in the field it is seeded
//! from OS entropy.
//!
//! A real inference backend replacing this must keep the
//! [`ClassifierPort`] contract: accept an optional payload, return a
//! [`Detection`], never fail because the payload is absent.

use log::debug;
use rand::Rng;
use rand::distributions::{Distribution, Uniform, WeightedIndex};

use super::{Detection, Indicator};
use crate::app::ports::ClassifierPort;
use crate::config::ClassifierConfig;
use crate::error::{ClassifierError, Error, Result};

pub struct SimulatedClassifier<R> {
    rng: R,
    indicators: Vec<Indicator>,
    choice: WeightedIndex<f64>,
    confidence: Uniform<f64>,
    model_loaded: bool,
}

impl<R: Rng> SimulatedClassifier<R> {
    /// Build the classifier from its policy.  Fails with [`Error::Config`]
    /// if the weights or confidence band are unusable.
    pub fn new(config: &ClassifierConfig, rng: R) -> Result<Self> {
        let band = config.confidence;
        if !(band.min.is_finite() && band.max.is_finite())
            || band.min > band.max
            || band.min < 0.0
            || band.max > 1.0
        {
            return Err(Error::Config("confidence band must lie within [0, 1]"));
        }

        let indicators: Vec<Indicator> = config.weights.iter().map(|w| w.indicator).collect();
        let choice = WeightedIndex::new(config.weights.iter().map(|w| w.weight))
            .map_err(|_| Error::Config("indicator weights must be non-negative with a positive sum"))?;

        Ok(Self {
            rng,
            indicators,
            choice,
            confidence: Uniform::new_inclusive(band.min, band.max),
            model_loaded: config.model_loaded,
        })
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model_loaded
    }

    /// Mark the model as (un)loaded.  Classifying while unloaded is a
    /// classifier fault.
    pub fn set_model_loaded(&mut self, loaded: bool) {
        self.model_loaded = loaded;
    }
}

impl<R: Rng> ClassifierPort for SimulatedClassifier<R> {
    fn classify(&mut self, payload: Option<&[u8]>) -> core::result::Result<Detection, ClassifierError> {
        if !self.model_loaded {
            return Err(ClassifierError::ModelNotLoaded);
        }
        if let Some(bytes) = payload {
            debug!("Simulated classifier ignoring {}-byte payload", bytes.len());
        }

        let indicator = self.indicators[self.choice.sample(&mut self.rng)];
        let confidence = self.confidence.sample(&mut self.rng);
        Ok(Detection { indicator, confidence })
    }
}
