//! TOML configuration file support.
//!
//! Settings are layered with figment: built-in defaults, then the TOML file,
//! then whatever was given explicitly on the command line.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli_args::OutputFormat;

/// Report path used when none is configured.
pub const DEFAULT_REPORT_PATH: &str = "contrast-report.json";
/// Log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layered extraction error
    Figment(Box<figment::Error>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Figment(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Figment(Box::new(e))
    }
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Palette source settings
    pub palette: PaletteConfig,
    /// Report output settings
    pub report: ReportConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Palette source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Design-token file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<PathBuf>,
    /// Restrict the check to one family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// Report output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Whole-palette JSON report path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Format for reports printed to stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// Logging. Nothing is logged unless `file` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Log level: trace, debug, info, warn, error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl ReportConfig {
    pub fn output_path(&self) -> &Path {
        self.output
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_REPORT_PATH))
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl CheckConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Merge defaults, an optional TOML file, and explicit overrides.
    ///
    /// Later layers win; `None` fields in `overrides` leave earlier values alone.
    pub fn layered(file: Option<&Path>, overrides: &CheckConfig) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(CheckConfig::default()));
        if let Some(path) = file {
            if !path.exists() {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            figment = figment.merge(Toml::file(path));
        }
        let config = figment.merge(Serialized::defaults(overrides)).extract()?;
        Ok(config)
    }
}
