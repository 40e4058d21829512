//! Generates the man page and shell completions from the CLI definitions.

use std::path::PathBuf;

use clap::{CommandFactory, ValueEnum};
use clap_complete::Shell;

#[path = "src/cli_args.rs"]
#[allow(dead_code)]
mod cli_args;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli_args.rs");

    let Some(out_dir) = std::env::var_os("OUT_DIR").map(PathBuf::from) else {
        return Ok(());
    };

    let mut cmd = cli_args::Cli::command();

    let mut man = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut man)?;
    std::fs::write(out_dir.join("gradecheck.1"), man)?;

    for shell in Shell::value_variants() {
        clap_complete::generate_to(*shell, &mut cmd, "gradecheck", &out_dir)?;
    }

    Ok(())
}
