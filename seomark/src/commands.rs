//! Rendering behind each subcommand. Every function returns the text to print
//! so that the binary only handles I/O.
use std::fmt::Write;

use indexmap::IndexMap;
use seomark_config::Config;
use seomark_core::{
  HeadTag,
  HeadingDescriptor,
  HeadingGenerator,
  HeadingReport,
  RenderContext,
  ai_meta_tags,
  breadcrumb_schema,
  build_page_head,
  faq_schema,
  open_graph_tags,
  organization_schema,
  render_head_html,
  software_application_schema,
  technical_article_schema,
  twitter_card_tags,
  webpage_schema,
};

use crate::{
  cli::{SchemaKind, TagKind},
  error::{Result, SeomarkError},
  page::PageFile,
};

/// Render the head fragment for a page.
///
/// Tags from the page's `[ai]` section are placed after the other meta and
/// link tags, ahead of any JSON-LD scripts.
///
/// # Errors
///
/// Returns an error if structured data cannot be serialized.
pub fn render_head(
  page: &PageFile,
  config: &Config,
  path: Option<&str>,
) -> Result<String> {
  let mut seo = page.seo.clone();
  if seo.canonical_path.is_none() {
    seo.canonical_path = path.map(ToString::to_string);
  }

  let mut tags = build_page_head(&seo, config)?;
  if let Some(ref ai) = page.ai {
    let at = tags
      .iter()
      .position(|tag| matches!(tag, HeadTag::Script { .. }))
      .unwrap_or(tags.len());
    tags.splice(at..at, ai.to_meta_tags().into_iter().map(HeadTag::Meta));
  }

  log::debug!("Rendered {} head tags", tags.len());
  Ok(render_head_html(&tags))
}

/// Render one tag map as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if `kind` is [`TagKind::AiMeta`] and the page has no
/// `[ai]` section.
pub fn render_tags(
  page: &PageFile,
  config: &Config,
  ctx: &RenderContext,
  kind: TagKind,
) -> Result<String> {
  let content = page.content(config);
  let tags = match kind {
    TagKind::Og => open_graph_tags(&content, ctx),
    TagKind::Twitter => twitter_card_tags(&content),
    TagKind::Ai => ai_meta_tags(&content, ctx),
    TagKind::AiMeta => {
      let ai = page.ai.as_ref().ok_or_else(|| {
        SeomarkError::Page("Page file has no [ai] section".to_string())
      })?;
      ai.to_meta_tags()
        .into_iter()
        .filter_map(|tag| {
          let key = tag.key()?.to_string();
          Some((key, tag.content))
        })
        .collect::<IndexMap<_, _>>()
    },
  };

  Ok(serde_json::to_string_pretty(&tags)?)
}

/// Render one JSON-LD object as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the schema cannot be serialized.
pub fn render_schema(
  page: &PageFile,
  config: &Config,
  ctx: &RenderContext,
  kind: SchemaKind,
) -> Result<String> {
  let content = page.content(config);
  let schema = match kind {
    SchemaKind::Software => software_application_schema(&content),
    SchemaKind::Article => technical_article_schema(&content, ctx),
    SchemaKind::Faq => {
      if page.faq.is_empty() {
        log::warn!("Page file has no FAQ entries, emitting an empty FAQPage");
      }
      faq_schema(&page.faq)
    },
    SchemaKind::Webpage => webpage_schema(&content, ctx),
    SchemaKind::Organization => organization_schema(&config.branding),
    SchemaKind::Breadcrumb => {
      breadcrumb_schema(
        &config.branding,
        ctx.path(content.pathname.as_deref()),
      )
    },
  };

  Ok(serde_json::to_string_pretty(&schema)?)
}

/// Human-readable heading report.
#[must_use]
pub fn format_report(report: &HeadingReport) -> String {
  let mut out = String::new();
  if report.is_valid {
    out.push_str("Heading structure is valid\n");
  } else {
    out.push_str("Heading structure is invalid\n");
  }

  if !report.errors.is_empty() {
    out.push_str("\nErrors:\n");
    for error in &report.errors {
      let _ = writeln!(out, "  - {error}");
    }
  }
  if !report.suggestions.is_empty() {
    out.push_str("\nSuggestions:\n");
    for suggestion in &report.suggestions {
      let _ = writeln!(out, "  - {suggestion}");
    }
  }
  out
}

/// Generate markup for each heading, one per line, using the configured
/// class tables.
///
/// # Errors
///
/// Returns an error if a heading has a level outside 1-6.
pub fn render_headings(
  headings: &[HeadingDescriptor],
  config: &Config,
) -> Result<String> {
  let generator = HeadingGenerator::new(config.headings.clone());
  let mut lines = Vec::with_capacity(headings.len());
  for heading in headings {
    lines.push(generator.generate(heading)?.to_html());
  }
  Ok(lines.join("\n"))
}
