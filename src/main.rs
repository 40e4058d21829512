//! CLI entry point for gradecheck.

use std::io::stdout;
use std::path::Path;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};

use gradecheck::cli::{Cli, OutputFormat, ReportMode};
use gradecheck::config::CheckConfig;
use gradecheck::logging::init_logging;
use gradecheck::luminance::{luminance_for, palette_luminance, render_text};
use gradecheck::model::Palette;
use gradecheck::report::{family_report, palette_report};
use gradecheck::tokens::load_palette;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "gradecheck", &mut stdout());
        return Ok(());
    }

    let config = CheckConfig::layered(
        cli.config_path().map(|p| p.as_path()),
        &cli.to_config_overrides(),
    )
    .wrap_err("Failed to load configuration")?;

    // Held until exit so buffered events are flushed
    let _guard = config
        .logging
        .file
        .as_deref()
        .map(|path| init_logging(path, config.logging.level()));

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Saved configuration to {}", path.display());
    }

    let tokens = config
        .palette
        .tokens
        .as_deref()
        .ok_or_else(|| eyre!("A token file is required (--tokens or [palette] tokens)"))?;
    let palette = load_palette(tokens)
        .wrap_err_with(|| format!("Failed to load palette from {}", tokens.display()))?;

    let family = config.palette.family.as_deref();
    let format = config.report.format();

    match cli.mode() {
        ReportMode::Luminance => print_luminance(&palette, family, format),
        ReportMode::Contrast => match family {
            Some(name) => print_family_report(&palette, name, format),
            None => write_palette_report(&palette, config.report.output_path()),
        },
    }
}

fn print_luminance(palette: &Palette, family: Option<&str>, format: OutputFormat) -> Result<()> {
    let entries = match family {
        Some(name) => luminance_for(palette, name)?,
        None => palette_luminance(palette),
    };

    match format {
        OutputFormat::Text => print!("{}", render_text(&entries)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&entries).wrap_err("Failed to serialize luminance")?
        ),
    }
    Ok(())
}

fn print_family_report(palette: &Palette, name: &str, format: OutputFormat) -> Result<()> {
    let report = family_report(palette, name)?;

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!(
            "{}",
            report.to_json().wrap_err("Failed to serialize report")?
        ),
    }
    Ok(())
}

fn write_palette_report(palette: &Palette, output: &Path) -> Result<()> {
    let report = palette_report(palette);
    let json = report.to_json().wrap_err("Failed to serialize report")?;

    std::fs::write(output, json)
        .wrap_err_with(|| format!("Failed to write to {}", output.display()))?;
    eprintln!("Wrote report to {}", output.display());
    eprintln!("{}", report.summary());
    Ok(())
}
