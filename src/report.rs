//! Report assembly for whole-palette and single-family checks.

use std::fmt::Write;

use serde::Serialize;

use crate::compliance::{ContrastResult, Violation, is_aa_compliant, is_aa_large_compliant};
use crate::family_check::check_family;
use crate::model::{FamilyName, Palette, PaletteError};
use crate::sweep::sweep;

/// Sweep results bucketed by the threshold they miss.
///
/// A pair below 3:1 lands in both buckets, so `not_aa` always contains
/// `not_aa_large`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaletteReport {
    #[serde(rename = "notAALarge")]
    pub not_aa_large: Vec<ContrastResult>,
    #[serde(rename = "notAA")]
    pub not_aa: Vec<ContrastResult>,
}

impl PaletteReport {
    pub fn from_results(results: impl IntoIterator<Item = ContrastResult>) -> Self {
        let mut report = Self::default();
        for result in results {
            if !is_aa_large_compliant(result.ratio) {
                report.not_aa_large.push(result.clone());
            }
            if !is_aa_compliant(result.ratio) {
                report.not_aa.push(result);
            }
        }
        report
    }

    pub fn is_clean(&self) -> bool {
        self.not_aa.is_empty() && self.not_aa_large.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// One-line count of failing pairs.
    pub fn summary(&self) -> String {
        format!(
            "{} pairs below AA (4.5:1), {} pairs below AA Large (3:1)",
            self.not_aa.len(),
            self.not_aa_large.len()
        )
    }
}

/// Sweep `palette` and bucket the results.
pub fn palette_report(palette: &Palette) -> PaletteReport {
    PaletteReport::from_results(sweep(palette))
}

/// Outcome of checking one family.
#[derive(Debug, Clone, PartialEq)]
pub enum FamilyReport {
    /// No pair misses its tier
    Clean { family: FamilyName },
    /// At least one pair misses its tier
    Violations {
        family: FamilyName,
        violations: Vec<Violation>,
    },
}

impl FamilyReport {
    pub fn new(family: FamilyName, violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::Clean { family }
        } else {
            Self::Violations { family, violations }
        }
    }

    pub fn family(&self) -> &FamilyName {
        match self {
            Self::Clean { family } | Self::Violations { family, .. } => family,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Clean { .. } => &[],
            Self::Violations { violations, .. } => violations.as_slice(),
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean { .. })
    }

    /// Human-readable listing, one violation per line.
    pub fn render_text(&self) -> String {
        match self {
            Self::Clean { family } => {
                format!("No contrast errors found in family '{family}'\n")
            }
            Self::Violations { family, violations } => {
                let mut out = format!(
                    "{} contrast errors in family '{}':\n",
                    violations.len(),
                    family
                );
                for violation in violations {
                    let _ = writeln!(out, "  {violation}");
                }
                out
            }
        }
    }

    /// The violations as a JSON array (empty when clean).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.violations())
    }
}

/// Check family `name` of `palette`.
pub fn family_report(palette: &Palette, name: &str) -> Result<FamilyReport, PaletteError> {
    let family = palette.family(name)?;
    Ok(FamilyReport::new(family.name().clone(), check_family(family)))
}
