//! Field report formatting.
//!
//! Each iteration writes three lines to the report stream:
//!
//! ```text
//! [DATA #1] pH: 7.0 | Turbidity: 3.0 NTU | Nitrogen: 1.5 mg/L
//! [AI]   Detection: Healthy Algae (confidence: 90.00%)
//! ----------------------------------------------------------------------
//! ```
//!
//! Readings print in shortest round-trip form with at least one decimal
//! digit.

use std::io::Write;

use crate::classifier::Detection;
use crate::sensors::SampleReading;

/// Label reported in place of a detection when the classifier faults.
pub const ERROR_LABEL: &str = "ERROR";

/// Width of the separator line.
pub const SEPARATOR_WIDTH: usize = 70;

/// What the classifier step produced for one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionOutcome {
    Detected(Detection),
    /// The classifier faulted; the sentinel is reported.
    Failed,
}

impl DetectionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Detected(d) => d.indicator.label(),
            Self::Failed => ERROR_LABEL,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::Detected(d) => d.confidence,
            Self::Failed => 0.0,
        }
    }
}

/// Everything printed for one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldReport {
    pub sample: u64,
    pub reading: SampleReading,
    pub detection: DetectionOutcome,
}

impl FieldReport {
    pub fn data_line(&self) -> String {
        format!(
            "[DATA #{}] pH: {} | Turbidity: {} NTU | Nitrogen: {} mg/L",
            self.sample,
            format_reading(self.reading.ph),
            format_reading(self.reading.turbidity_ntu),
            format_reading(self.reading.nitrogen_mg_l),
        )
    }

    pub fn detection_line(&self) -> String {
        format!(
            "[AI]   Detection: {} (confidence: {:.2}%)",
            self.detection.label(),
            self.detection.confidence() * 100.0,
        )
    }

    /// Write all three lines and flush, so each report is visible as
    /// soon as it is produced.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.data_line())?;
        writeln!(out, "{}", self.detection_line())?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        out.flush()
    }
}

/// `7.0`, `3.25`, `0.5`: `Debug` on `f64` is the shortest round-trip
/// form and always keeps a fractional part for finite values in range.
fn format_reading(value: f64) -> String {
    format!("{value:?}")
}
