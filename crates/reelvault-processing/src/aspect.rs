//! Display-aspect classification.
//!
//! Buckets a stream's pixel dimensions into one of three display
//! categories. The test uses truncating integer division rather than a
//! ratio comparison, so exact 16:9 and several near-16:9 sizes collapse
//! into the same bucket. Store key layout depends on these exact bucket
//! names; do not loosen the arithmetic.

use crate::probe::ProbeOutput;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectCategory {
    Landscape,
    Portrait,
    Other,
}

impl AspectCategory {
    /// Classify pixel dimensions, evaluated in order:
    /// 16:9-ish is landscape, 9:16-ish is portrait, everything else other.
    pub fn classify(width: i64, height: i64) -> Self {
        if 9 * (width / 16) == height {
            AspectCategory::Landscape
        } else if 16 * (width / 9) == height {
            AspectCategory::Portrait
        } else {
            AspectCategory::Other
        }
    }

    /// Classify a probe result by its primary stream. No streams means
    /// unknown dimensions, which classifies as `Other`.
    pub fn from_probe(probe: &ProbeOutput) -> Self {
        match probe.primary_dimensions() {
            Some((width, height)) => Self::classify(width, height),
            None => AspectCategory::Other,
        }
    }
}

impl Display for AspectCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AspectCategory::Landscape => write!(f, "landscape"),
            AspectCategory::Portrait => write!(f, "portrait"),
            AspectCategory::Other => write!(f, "other"),
        }
    }
}
