//! Deployment configuration parameters
//!
//! All tunable parameters for a monitoring unit.  The binary runs with
//! [`DeploymentConfig::default`]; every value is serde-friendly so a
//! provisioning layer can supply overrides later.

use serde::{Deserialize, Serialize};

use crate::classifier::Indicator;
use crate::error::{Error, Result};

/// Inclusive `[min, max]` range for one reading field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Weight assigned to one indicator category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorWeight {
    pub indicator: Indicator,
    pub weight: f64,
}

/// Policy for the stand-in indicator classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Discrete distribution over the indicator set.  Every category
    /// must appear exactly once.
    pub weights: Vec<IndicatorWeight>,
    /// Band the asserted confidence is drawn from (sub-range of [0, 1]).
    pub confidence: Bounds,
    /// Whether the inference model is considered loaded at startup.
    pub model_loaded: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            weights: vec![
                IndicatorWeight { indicator: Indicator::EColi, weight: 0.2 },
                IndicatorWeight { indicator: Indicator::Chaoborus, weight: 0.2 },
                IndicatorWeight { indicator: Indicator::HealthyAlgae, weight: 0.6 },
            ],
            confidence: Bounds::new(0.85, 0.99),
            model_loaded: true,
        }
    }
}

/// Core deployment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    // --- Site ---
    /// Human-readable deployment site, logged at power-up.
    pub site_name: String,
    /// Operational availability target (percent), logged at power-up.
    pub uptime_target_percent: u8,

    // --- Timing ---
    /// Pause between samples (seconds).
    pub sample_interval_secs: u64,
    /// Slice length used while pausing so an interrupt is seen promptly (ms).
    pub shutdown_poll_ms: u64,

    // --- Physico-chemical bounds ---
    pub ph: Bounds,
    /// Turbidity in NTU.
    pub turbidity_ntu: Bounds,
    /// Nitrogen concentration in mg/L.
    pub nitrogen_mg_l: Bounds,
    /// Decimal places every reading is rounded to.
    pub reading_precision: u32,

    // --- Classifier ---
    pub classifier: ClassifierConfig,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            site_name: "Sasthamcotta Lake (Ramsar Site)".to_string(),
            uptime_target_percent: 98,

            sample_interval_secs: 5,
            shutdown_poll_ms: 100,

            ph: Bounds::new(6.5, 8.5),
            turbidity_ntu: Bounds::new(1.0, 5.0),
            nitrogen_mg_l: Bounds::new(0.5, 2.5),
            reading_precision: 2,

            classifier: ClassifierConfig::default(),
        }
    }
}

impl DeploymentConfig {
    /// Reject configurations the loop cannot honour.  Values are never
    /// clamped.
    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_secs == 0 {
            return Err(Error::Config("sample_interval_secs must be > 0"));
        }
        if self.shutdown_poll_ms == 0 {
            return Err(Error::Config("shutdown_poll_ms must be > 0"));
        }
        if !self.ph.is_valid() || !self.turbidity_ntu.is_valid() || !self.nitrogen_mg_l.is_valid() {
            return Err(Error::Config("reading bounds must be finite with min <= max"));
        }
        if self.reading_precision > 6 {
            return Err(Error::Config("reading_precision must be <= 6"));
        }
        if self.uptime_target_percent > 100 {
            return Err(Error::Config("uptime_target_percent must be <= 100"));
        }

        let c = &self.classifier;
        if !c.confidence.is_valid() || c.confidence.min < 0.0 || c.confidence.max > 1.0 {
            return Err(Error::Config("confidence band must lie within [0, 1]"));
        }
        if c.weights.len() != Indicator::ALL.len() {
            return Err(Error::Config("every indicator needs exactly one weight"));
        }
        for indicator in Indicator::ALL {
            let count = c.weights.iter().filter(|w| w.indicator == indicator).count();
            if count != 1 {
                return Err(Error::Config("every indicator needs exactly one weight"));
            }
        }
        if c.weights.iter().any(|w| !w.weight.is_finite() || w.weight < 0.0) {
            return Err(Error::Config("indicator weights must be finite and >= 0"));
        }
        if c.weights.iter().all(|w| w.weight == 0.0) {
            return Err(Error::Config("at least one indicator weight must be > 0"));
        }
        Ok(())
    }
}
