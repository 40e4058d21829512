//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, allowing it to be included from build.rs for man page
//! generation.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Output format for reports printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON document
    Json,
}

/// WCAG contrast compliance checker for graded design-system palettes.
#[derive(Parser, Debug)]
#[command(name = "gradecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Design-token file with a `colors.system` section (YAML, or JSON by extension)
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present_any = ["config", "completions"]
    )]
    pub tokens: Option<PathBuf>,

    /// Report relative luminance of each color
    #[arg(short, long, conflicts_with = "contrast")]
    pub luminance: bool,

    /// Report contrast failures (default)
    #[arg(short, long)]
    pub contrast: bool,

    /// Check a single color family by name
    #[arg(short, long, value_name = "NAME")]
    pub family: Option<String>,

    /// Whole-palette JSON report path (default: contrast-report.json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Format for reports printed to stdout
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save the merged configuration to a TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Write trace logs to this file (logging is off otherwise)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
