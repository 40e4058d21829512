//! Whole-palette sweep across family pairs.
//!
//! For each pair of families `(b, c)` with `b` before `c`, the `i`-th color
//! of `b` is compared with the `j`-th color of `c` for every `i < j` below
//! the shorter family's length. Positions follow ascending grade order.
//! Pairs closer than 40 grades are skipped; everything else is recorded
//! whether it passes or not, leaving classification to the report.

use tracing::{debug, info};

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::compliance::{ContrastResult, MIN_GRADE_DISTANCE};
use crate::model::{Color, ColorFamily, Palette};
use crate::wcag::contrast_ratio;

/// Compare two families position by position.
pub fn sweep_pair(base: &ColorFamily, other: &ColorFamily) -> Vec<ContrastResult> {
    let len = base.len().min(other.len());
    let base_colors: Vec<&Color> = base.colors().take(len).collect();
    let other_colors: Vec<&Color> = other.colors().take(len).collect();

    let mut results = Vec::new();
    for (i, b) in base_colors.iter().enumerate() {
        for c in &other_colors[i + 1..] {
            if b.grade.distance(c.grade) < MIN_GRADE_DISTANCE {
                continue;
            }
            let result = ContrastResult {
                ratio: contrast_ratio(b.value, c.value),
                base: base.swatch(b),
                contrast: other.swatch(c),
            };
            debug!(
                base = %result.base,
                contrast = %result.contrast,
                ratio = result.ratio,
                "compared"
            );
            results.push(result);
        }
    }
    results
}

/// Every cross-family pair far enough apart to be expected to contrast.
#[cfg_attr(debug_assertions, instrument(skip(palette), fields(families = palette.len())))]
pub fn sweep(palette: &Palette) -> Vec<ContrastResult> {
    let families: Vec<&ColorFamily> = palette.families().collect();

    let mut results = Vec::new();
    for (idx, base) in families.iter().enumerate() {
        for other in &families[idx + 1..] {
            results.extend(sweep_pair(base, other));
        }
    }

    info!(pairs = results.len(), "palette sweep finished");
    results
}
