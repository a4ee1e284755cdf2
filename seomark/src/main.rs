use std::{
  fs,
  io::{self, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result, bail};
use log::info;
use seomark::{
  cli::{Cli, Commands},
  commands,
  page::PageFile,
};
use seomark_config::Config;
use seomark_core::validate_heading_structure;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(cli.verbose.log_level_filter())
    .init();

  let mut stdout = io::stdout().lock();

  match &cli.command {
    Commands::Init {
      output,
      format,
      force,
    } => {
      // Check if file already exists and that we're not forcing overwrite
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
      {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
        info!("Created directory: {}", parent.display());
      }

      Config::generate_default_config(format, output).wrap_err_with(|| {
        format!(
          "Failed to generate configuration file: {}",
          output.display()
        )
      })?;

      info!(
        "Configuration file created successfully. Set branding.app_name and \
         branding.base_url before rendering pages."
      );
    },

    Commands::Head { page, path } => {
      let config = load_config(&cli)?;
      let page = load_page(page)?;
      let html = commands::render_head(&page, &config, path.as_deref())?;
      writeln!(stdout, "{html}")?;
    },

    Commands::Tags { page, kind, render } => {
      let config = load_config(&cli)?;
      let page = load_page(page)?;
      let json =
        commands::render_tags(&page, &config, &render.context(), *kind)?;
      writeln!(stdout, "{json}")?;
    },

    Commands::Schema { page, kind, render } => {
      let config = load_config(&cli)?;
      let page = load_page(page)?;
      let json =
        commands::render_schema(&page, &config, &render.context(), *kind)?;
      writeln!(stdout, "{json}")?;
    },

    Commands::Headings { file, json, html } => {
      let headings = PageFile::headings_from_file(file).wrap_err_with(|| {
        format!("Failed to read headings from {}", file.display())
      })?;
      let report = validate_heading_structure(&headings);

      if *json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
      } else {
        write!(stdout, "{}", commands::format_report(&report))?;
      }

      if *html {
        let config = load_config(&cli)?;
        writeln!(stdout, "{}", commands::render_headings(&headings, &config)?)?;
      }

      if !report.is_valid {
        bail!(
          "Heading structure of {} has {} error(s)",
          file.display(),
          report.errors.len()
        );
      }
    },
  }

  Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
  Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load seomark configuration")
}

fn load_page(path: &Path) -> Result<PageFile> {
  PageFile::from_file(path)
    .wrap_err_with(|| format!("Failed to load page file: {}", path.display()))
}
