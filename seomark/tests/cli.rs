#![allow(clippy::expect_used, clippy::unreachable, reason = "Fine in tests")]
use std::fs;

use clap::Parser;
use jiff::Timestamp;
use seomark::{
  cli::{Cli, Commands, RenderArgs, SchemaKind, TagKind},
  commands,
  page::PageFile,
};
use seomark_config::{BrandingConfig, Config};
use seomark_core::validate_heading_structure;
use serde_json::Value;
use tempfile::tempdir;

const PAGE_TOML: &str = r#"
faq = [
  { question = "What is staking?", answer = "Locking tokens to secure a network.", upvote_count = 4 },
  { question = "Can I unstake?", answer = "Yes, after the unbonding period." },
]

[seo]
title = "Staking Guide"
description = "Stake tokens and earn rewards"
keywords = "staking, rewards"
canonical_path = "/guides/staking"

[content]
title = "Staking Guide"
description = "Stake tokens and earn rewards"
keywords = ["staking", "rewards"]
category = "DeFi"
audience = "developers, validators"
complexity = "advanced"
content_type = "tutorial"
reading_time = 12

[ai]
content_type = "tutorial"
summary = "Walkthrough of staking"
wallet_required = true
use_cases = ["staking", "governance"]

[[headings]]
level = 1
text = "Staking Guide"

[[headings]]
level = 2
text = "Choose a validator"
context = "step"
"#;

fn config() -> Config {
  let mut config =
    Config::with_branding(BrandingConfig::new("MyApp", "https://myapp.io"));
  config.branding.twitter_handle = Some("@myapp".to_string());
  config
}

fn fixed_args() -> RenderArgs {
  RenderArgs {
    path: Some("/guides/staking".to_string()),
    now: Some(
      "2024-06-01T00:00:00Z"
        .parse::<Timestamp>()
        .expect("valid timestamp"),
    ),
  }
}

fn write_page() -> (tempfile::TempDir, PageFile) {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let path = temp_dir.path().join("staking.toml");
  fs::write(&path, PAGE_TOML).expect("Failed to write page file in test");
  let page = PageFile::from_file(&path).expect("Failed to load page file");
  (temp_dir, page)
}

#[test]
fn test_page_file_loads_every_section() {
  let (_dir, page) = write_page();
  assert_eq!(page.seo.title.as_deref(), Some("Staking Guide"));
  assert_eq!(page.faq.len(), 2);
  assert_eq!(page.faq[0].upvote_count, Some(4));
  assert_eq!(page.headings.len(), 2);
  assert!(page.ai.is_some());
  assert_eq!(
    page.content.as_ref().map(|c| c.reading_time()),
    Some(12)
  );
}

#[test]
fn test_head_places_ai_tags_before_scripts() {
  let (_dir, page) = write_page();
  let html =
    commands::render_head(&page, &config(), None).expect("render head");

  assert!(html.starts_with("<title>Staking Guide | MyApp</title>"));
  assert!(html.contains(
    "<link rel=\"canonical\" href=\"https://myapp.io/guides/staking\" />"
  ));
  assert!(html.contains("<meta name=\"twitter:site\" content=\"@myapp\" />"));
  assert!(
    html.contains("<meta name=\"ai:wallet-required\" content=\"true\" />")
  );
  assert!(
    html.contains("<meta name=\"ai:use-cases\" content=\"staking,governance\" />")
  );
}

#[test]
fn test_head_path_fallback() {
  let page = PageFile::default();
  let html = commands::render_head(&page, &config(), Some("/about"))
    .expect("render head");
  assert!(html.contains("href=\"https://myapp.io/about\""));
}

#[test]
fn test_tags_as_json() {
  let (_dir, page) = write_page();
  let ctx = fixed_args().context();

  let twitter: Value = serde_json::from_str(
    &commands::render_tags(&page, &config(), &ctx, TagKind::Twitter)
      .expect("render twitter tags"),
  )
  .expect("valid JSON");
  assert_eq!(twitter["twitter:data1"], "Advanced");
  assert_eq!(twitter["twitter:data2"], "12 min");

  let ai: Value = serde_json::from_str(
    &commands::render_tags(&page, &config(), &ctx, TagKind::AiMeta)
      .expect("render ai meta"),
  )
  .expect("valid JSON");
  assert_eq!(ai["ai:summary"], "Walkthrough of staking");
  assert_eq!(ai["ai:complexity"], "intermediate");
}

#[test]
fn test_ai_meta_requires_section() {
  let ctx = fixed_args().context();
  let result = commands::render_tags(
    &PageFile::default(),
    &config(),
    &ctx,
    TagKind::AiMeta,
  );
  assert!(result.is_err());
}

#[test]
fn test_schema_output() {
  let (_dir, page) = write_page();
  let ctx = fixed_args().context();

  let article: Value = serde_json::from_str(
    &commands::render_schema(&page, &config(), &ctx, SchemaKind::Article)
      .expect("render article"),
  )
  .expect("valid JSON");
  assert_eq!(article["@type"], "TechnicalArticle");
  assert_eq!(article["dateModified"], "2024-06-01T00:00:00Z");
  assert_eq!(article["proficiencyLevel"], "Expert");
  assert_eq!(article["timeRequired"], "PT12M");

  let faq: Value = serde_json::from_str(
    &commands::render_schema(&page, &config(), &ctx, SchemaKind::Faq)
      .expect("render faq"),
  )
  .expect("valid JSON");
  assert_eq!(faq["mainEntity"][0]["upvoteCount"], 4);
  assert!(faq["mainEntity"][1].get("upvoteCount").is_none());

  let crumbs: Value = serde_json::from_str(
    &commands::render_schema(&page, &config(), &ctx, SchemaKind::Breadcrumb)
      .expect("render breadcrumbs"),
  )
  .expect("valid JSON");
  assert_eq!(crumbs["itemListElement"][2]["name"], "Staking");
}

#[test]
fn test_headings_report_and_markup() {
  let (_dir, page) = write_page();
  let report = validate_heading_structure(&page.headings);
  assert!(report.is_valid);
  assert!(commands::format_report(&report).starts_with("Heading structure is valid"));

  let html = commands::render_headings(&page.headings, &config())
    .expect("render headings");
  let lines: Vec<&str> = html.lines().collect();
  assert_eq!(lines.len(), 2);
  assert!(lines[1].starts_with("<h2 id=\"choose-a-validator\""));
}

#[test]
fn test_headings_from_json_list() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let path = temp_dir.path().join("headings.json");
  fs::write(
    &path,
    r#"[{"level": 1, "text": "Title"}, {"level": 4, "text": "Jumped to H4"}]"#,
  )
  .expect("Failed to write headings in test");

  let headings =
    PageFile::headings_from_file(&path).expect("Failed to load headings");
  let report = validate_heading_structure(&headings);
  assert!(!report.is_valid);
  assert!(commands::format_report(&report).contains("Errors:"));
}

#[test]
fn test_cli_parses_global_and_render_flags() {
  let cli = Cli::try_parse_from([
    "seomark",
    "-c",
    "site.toml",
    "--config",
    "branding.base_url=https://myapp.io",
    "schema",
    "page.toml",
    "--kind",
    "webpage",
    "--now",
    "2024-01-01T00:00:00Z",
  ])
  .expect("valid arguments");

  assert_eq!(cli.config_files.len(), 1);
  assert_eq!(cli.config_overrides.len(), 1);
  let Commands::Schema { kind, render, .. } = cli.command else {
    unreachable!("parsed a different subcommand");
  };
  assert_eq!(kind, SchemaKind::Webpage);
  assert!(render.now.is_some());
  assert_eq!(render.context().current_path, "/");
}
