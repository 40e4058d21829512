//! WCAG AA compliance thresholds and contrast verdicts.

use std::fmt;

use serde::Serialize;

use crate::model::Swatch;

/// Minimum contrast for normal text (WCAG AA).
pub const MIN_CONTRAST_AA: f64 = 4.5;
/// Minimum contrast for large text (WCAG AA Large).
pub const MIN_CONTRAST_AA_LARGE: f64 = 3.0;

/// Grades closer than this are not expected to contrast at all.
pub const MIN_GRADE_DISTANCE: u32 = 40;
/// Grades at least this far apart must meet the normal-text threshold.
pub const AA_GRADE_DISTANCE: u32 = 50;

pub fn is_aa_compliant(ratio: f64) -> bool {
    ratio >= MIN_CONTRAST_AA
}

pub fn is_aa_large_compliant(ratio: f64) -> bool {
    ratio >= MIN_CONTRAST_AA_LARGE
}

/// Compliance tier a pair is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    /// Normal text, 4.5:1
    #[serde(rename = "AA")]
    Aa,
    /// Large text, 3:1
    #[serde(rename = "AA Large")]
    AaLarge,
}

impl Tier {
    /// Tier implied by the grade distance between two swatches.
    pub fn for_distance(distance: u32) -> Self {
        if distance >= AA_GRADE_DISTANCE {
            Self::Aa
        } else {
            Self::AaLarge
        }
    }

    pub fn min_ratio(self) -> f64 {
        match self {
            Self::Aa => MIN_CONTRAST_AA,
            Self::AaLarge => MIN_CONTRAST_AA_LARGE,
        }
    }

    pub fn passes(self, ratio: f64) -> bool {
        match self {
            Self::Aa => is_aa_compliant(ratio),
            Self::AaLarge => is_aa_large_compliant(ratio),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Contrast between two swatches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub base: Swatch,
    pub contrast: Swatch,
}

impl ContrastResult {
    /// Grade distance between the two sides.
    pub fn distance(&self) -> u32 {
        self.base.grade().distance(self.contrast.grade())
    }
}

/// A pair that misses the tier its grade distance requires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    #[serde(flatten)]
    pub result: ContrastResult,
    pub required: Tier,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: {:.2}:1 (required: {:.1} for {})",
            self.result.base,
            self.result.contrast,
            self.result.ratio,
            self.required.min_ratio(),
            self.required
        )
    }
}
