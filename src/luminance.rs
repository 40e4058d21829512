//! Relative luminance listing for a palette or a single family.

use std::fmt::Write;

use serde::Serialize;

use crate::model::{ColorFamily, Palette, PaletteError, Swatch};
use crate::wcag::relative_luminance;

/// Luminance of one stored color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuminanceEntry {
    pub swatch: Swatch,
    pub value: String,
    pub luminance: f64,
}

/// Entries for one family in ascending grade order.
pub fn family_luminance(family: &ColorFamily) -> Vec<LuminanceEntry> {
    family
        .colors()
        .map(|color| LuminanceEntry {
            swatch: family.swatch(color),
            value: color.hex(),
            luminance: relative_luminance(color.value),
        })
        .collect()
}

/// Entries for every family, families in palette order.
pub fn palette_luminance(palette: &Palette) -> Vec<LuminanceEntry> {
    palette.families().flat_map(family_luminance).collect()
}

/// Entries for family `name` of `palette`.
pub fn luminance_for(palette: &Palette, name: &str) -> Result<Vec<LuminanceEntry>, PaletteError> {
    palette.family(name).map(family_luminance)
}

/// Aligned `swatch  #rrggbb  0.0000` lines.
pub fn render_text(entries: &[LuminanceEntry]) -> String {
    let labels: Vec<String> = entries.iter().map(|e| e.swatch.to_string()).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (label, entry) in labels.iter().zip(entries) {
        let _ = writeln!(
            out,
            "{label:<width$}  {}  {:.4}",
            entry.value, entry.luminance
        );
    }
    out
}
