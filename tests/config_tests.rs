use std::path::{Path, PathBuf};

use gradecheck::cli_args::OutputFormat;
use gradecheck::config::{CheckConfig, DEFAULT_REPORT_PATH, PaletteConfig, ReportConfig};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gradecheck-config-{}-{name}", std::process::id()))
}

#[test]
fn test_default_config() {
    let config = CheckConfig::default();
    assert!(config.palette.tokens.is_none());
    assert_eq!(config.report.output_path(), Path::new(DEFAULT_REPORT_PATH));
    assert_eq!(config.report.format(), OutputFormat::Text);
    assert_eq!(config.logging.level(), "info");
}

#[test]
fn test_parse_toml() {
    let toml_str = r##"
[palette]
tokens = "tokens.yml"
family = "gray"

[report]
output = "out.json"
format = "json"

[logging]
level = "debug"
"##;

    let config: CheckConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.palette.tokens, Some(PathBuf::from("tokens.yml")));
    assert_eq!(config.palette.family.as_deref(), Some("gray"));
    assert_eq!(config.report.format(), OutputFormat::Json);
    assert_eq!(config.logging.level(), "debug");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_cli_overrides_file_values() {
    let path = temp_path("layered.toml");
    std::fs::write(
        &path,
        "[palette]\ntokens = \"file.yml\"\nfamily = \"gray\"\n\n[report]\nformat = \"json\"\n",
    )
    .unwrap();

    let overrides = CheckConfig {
        palette: PaletteConfig {
            family: Some("blue".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let config = CheckConfig::layered(Some(&path), &overrides).unwrap();
    std::fs::remove_file(&path).ok();

    // Unset overrides keep the file's values
    assert_eq!(config.palette.tokens, Some(PathBuf::from("file.yml")));
    assert_eq!(config.palette.family.as_deref(), Some("blue"));
    assert_eq!(config.report.format(), OutputFormat::Json);
}

#[test]
fn test_layered_without_file() {
    let overrides = CheckConfig {
        report: ReportConfig {
            output: Some(PathBuf::from("custom.json")),
            format: None,
        },
        ..Default::default()
    };
    let config = CheckConfig::layered(None, &overrides).unwrap();
    assert_eq!(config.report.output_path(), Path::new("custom.json"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let missing = temp_path("does-not-exist.toml");
    assert!(CheckConfig::layered(Some(&missing), &CheckConfig::default()).is_err());
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_path("saved.toml");
    let config = CheckConfig {
        palette: PaletteConfig {
            tokens: Some(PathBuf::from("tokens.json")),
            family: None,
        },
        ..Default::default()
    };

    config.save(&path).unwrap();
    let loaded = CheckConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}
