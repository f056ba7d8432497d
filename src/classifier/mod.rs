//! Biological indicator classification.
//!
//! The classifier turns an optional sensor-imagery payload into a
//! [`Detection`]: one label from the closed [`Indicator`] set plus the
//! classifier's asserted confidence.  Callers depend on the
//! [`ClassifierPort`](crate::app::ports::ClassifierPort) trait; the only
//! implementation today is the [`simulated`] stand-in.

pub mod simulated;

use core::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of biological indicator categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Faecal contamination marker.
    #[serde(rename = "E. coli")]
    EColi,
    /// Phantom midge larvae, a eutrophication marker.
    #[serde(rename = "Chaoborus spp.")]
    Chaoborus,
    /// Benign category.
    #[serde(rename = "Healthy Algae")]
    HealthyAlgae,
}

impl Indicator {
    /// Every category, in reporting order.
    pub const ALL: [Indicator; 3] = [Self::EColi, Self::Chaoborus, Self::HealthyAlgae];

    /// Label as printed in field reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::EColi => "E. coli",
            Self::Chaoborus => "Chaoborus spp.",
            Self::HealthyAlgae => "Healthy Algae",
        }
    }

    /// Whether the indicator warrants attention (anything but the benign
    /// category).
    pub const fn is_concern(self) -> bool {
        !matches!(self, Self::HealthyAlgae)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier output for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub indicator: Indicator,
    /// Asserted certainty in [0, 1].
    pub confidence: f64,
}
