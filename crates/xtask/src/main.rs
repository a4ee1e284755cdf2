#![allow(clippy::print_stdout, reason = "xtask reports progress on stdout")]
use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, shells};
use clap_mangen::Man;
use seomark::cli::Cli;

const BIN_NAME: &str = "seomark";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the seomark CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with = "manpage_only")]
    completions_only: bool,

    /// Only generate the manpage.
    #[arg(long, conflicts_with = "completions_only")]
    manpage_only: bool,
  },
}

fn main() -> Result<()> {
  let Commands::Dist {
    output_dir,
    completions_only,
    manpage_only,
  } = Xtask::parse().command;

  if !manpage_only {
    generate_completions(&output_dir)?;
  }
  if !completions_only {
    generate_manpage(&output_dir)?;
  }

  Ok(())
}

/// Generate shell completions for Bash, Zsh, Fish and PowerShell.
fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir).with_context(|| {
    format!("Failed to create {}", completions_dir.display())
  })?;

  let mut cmd = Cli::command();
  generate_to(shells::Bash, &mut cmd, BIN_NAME, &completions_dir)?;
  generate_to(shells::Zsh, &mut cmd, BIN_NAME, &completions_dir)?;
  generate_to(shells::Fish, &mut cmd, BIN_NAME, &completions_dir)?;
  generate_to(shells::PowerShell, &mut cmd, BIN_NAME, &completions_dir)?;
  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

/// Generate `seomark.1`.
fn generate_manpage(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)
    .with_context(|| format!("Failed to create {}", man_dir.display()))?;

  let file_path = man_dir.join(format!("{BIN_NAME}.1"));
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  Man::new(Cli::command())
    .render(&mut file)
    .context("Failed to render manpage")?;
  println!("Manpage generated in {}", man_dir.display());
  Ok(())
}
