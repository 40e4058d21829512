//! CLI argument handling.

use std::path::PathBuf;

pub use crate::cli_args::{Cli, OutputFormat};
use crate::config::{CheckConfig, LoggingConfig, PaletteConfig, ReportConfig};

/// Which report the invocation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Contrast,
    Luminance,
}

impl Cli {
    /// Selected report; contrast unless `--luminance` is given.
    pub fn mode(&self) -> ReportMode {
        if self.luminance {
            ReportMode::Luminance
        } else {
            ReportMode::Contrast
        }
    }

    /// Convert flat CLI args to nested CheckConfig for Figment merging.
    ///
    /// Only fields that are explicitly set on the CLI will be included in the
    /// serialized config (via `skip_serializing_if`), allowing proper layering
    /// with TOML file settings.
    pub fn to_config_overrides(&self) -> CheckConfig {
        CheckConfig {
            palette: PaletteConfig {
                tokens: self.tokens.clone(),
                family: self.family.clone(),
            },
            report: ReportConfig {
                output: self.output.clone(),
                format: self.format,
            },
            logging: LoggingConfig {
                file: self.log_file.clone(),
                level: self.log_level.clone(),
            },
        }
    }

    /// The config file to layer under the CLI flags, if any.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }
}
