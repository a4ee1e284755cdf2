use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use jiff::Timestamp;
use seomark_core::RenderContext;

/// Command line interface for seomark
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "seomark: SEO, social preview and AI metadata for web pages"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  #[command(flatten)]
  pub verbose: Verbosity<InfoLevel>,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the seomark CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new seomark configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "seomark.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Render the `<head>` fragment for a page file.
  Head {
    /// Page file (TOML or JSON).
    page: PathBuf,

    /// Canonical path to use when the page file declares none.
    #[arg(long)]
    path: Option<String>,
  },

  /// Print a tag map for a page as JSON.
  Tags {
    /// Page file (TOML or JSON).
    page: PathBuf,

    /// Which tag map to generate.
    #[arg(short, long, value_enum, default_value_t = TagKind::Og)]
    kind: TagKind,

    #[command(flatten)]
    render: RenderArgs,
  },

  /// Print a JSON-LD object for a page.
  Schema {
    /// Page file (TOML or JSON).
    page: PathBuf,

    /// Which schema.org type to generate.
    #[arg(short, long, value_enum)]
    kind: SchemaKind,

    #[command(flatten)]
    render: RenderArgs,
  },

  /// Validate a heading sequence.
  ///
  /// Exits with a non-zero status if the structure is invalid.
  Headings {
    /// Page file with a `headings` list, or a JSON list of headings.
    file: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Also print the generated heading markup.
    #[arg(long)]
    html: bool,
  },
}

/// Tag maps available through `seomark tags`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
  /// Open Graph tags.
  Og,
  /// Twitter Card tags.
  Twitter,
  /// `ai:`, `llm:` and `semantic:` tags derived from the page content.
  Ai,
  /// Tags from the page's explicit `[ai]` section.
  AiMeta,
}

/// schema.org types available through `seomark schema`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
  Software,
  Article,
  Faq,
  Webpage,
  Organization,
  Breadcrumb,
}

/// Path and time used for URLs and modification dates.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
  /// Path of the page, used when the page content has no `pathname`.
  #[arg(long)]
  pub path: Option<String>,

  /// Current time (RFC 3339). Defaults to the system clock.
  #[arg(long)]
  pub now: Option<Timestamp>,
}

impl RenderArgs {
  /// Build the render context, falling back to the environment for anything
  /// not given on the command line.
  #[must_use]
  pub fn context(&self) -> RenderContext {
    let mut ctx = RenderContext::ambient(self.path.as_deref());
    if let Some(now) = self.now {
      ctx.now = now;
    }
    ctx
  }
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
