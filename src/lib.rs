//! WCAG 2.x contrast compliance checking for graded design-system palettes.
//!
//! A palette is a set of color families, each holding colors at numeric
//! grades on a light-to-dark scale. Two checks are provided:
//!
//! - [`family_check`] walks one family and reports pairs that miss the
//!   threshold their grade distance calls for.
//! - [`sweep`] compares colors across every pair of families, and
//!   [`report`] buckets the results by the AA and AA Large thresholds.

pub mod cli;
pub mod cli_args;
pub mod compliance;
pub mod config;
pub mod family_check;
pub mod logging;
pub mod luminance;
pub mod model;
pub mod report;
pub mod sweep;
pub mod tokens;
pub mod wcag;
