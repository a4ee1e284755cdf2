use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use seomark_config::HeadingsConfig;

use super::{HeadingDescriptor, HeadingNode, SemanticContext};
use crate::{
  error::{SeoError, SeoResult},
  utils::join_non_empty,
};

/// Builds [`HeadingNode`]s using a set of class tables.
#[derive(Debug, Clone, Default)]
pub struct HeadingGenerator {
  styles: HeadingsConfig,
}

impl HeadingGenerator {
  #[must_use]
  pub const fn new(styles: HeadingsConfig) -> Self {
    Self { styles }
  }

  /// Convert a descriptor into a renderable heading.
  ///
  /// # Errors
  ///
  /// Returns [`SeoError::InvalidHeadingLevel`] if `level` is not 1-6.
  pub fn generate(
    &self,
    descriptor: &HeadingDescriptor,
  ) -> SeoResult<HeadingNode> {
    let level = descriptor.level;
    if !(1..=6).contains(&level) {
      return Err(SeoError::InvalidHeadingLevel(level));
    }

    let base_class = self.styles.level_class(level).unwrap_or_default();
    let context_class =
      self.context_class(descriptor.context.unwrap_or_default());
    let extra_class = descriptor.class_name.as_deref().unwrap_or_default();

    Ok(HeadingNode {
      level,
      id: descriptor.resolved_id(),
      class: join_non_empty(
        &[base_class.trim(), context_class.trim(), extra_class.trim()],
        " ",
      ),
      aria_level: level,
      text: descriptor.text.clone(),
    })
  }

  fn context_class(&self, context: SemanticContext) -> &str {
    let classes = &self.styles.contexts;
    match context {
      SemanticContext::PageTitle => &classes.page_title,
      SemanticContext::Section => &classes.section,
      SemanticContext::Subsection => &classes.subsection,
      SemanticContext::Feature => &classes.feature,
      SemanticContext::Benefit => &classes.benefit,
      SemanticContext::Step => &classes.step,
    }
  }
}

/// Generate a heading with the built-in class tables.
///
/// # Errors
///
/// Returns [`SeoError::InvalidHeadingLevel`] if `level` is not 1-6.
pub fn generate_heading(
  descriptor: &HeadingDescriptor,
) -> SeoResult<HeadingNode> {
  HeadingGenerator::default().generate(descriptor)
}

impl HeadingNode {
  /// Render the heading as an HTML element.
  ///
  /// Empty `id` and `class` values are left out rather than emitted as empty
  /// attributes.
  #[must_use]
  pub fn to_html(&self) -> String {
    let tag = self.tag();
    let mut html = format!("<{tag}");

    if !self.id.is_empty() {
      let _ = write!(html, " id=\"{}\"", encode_double_quoted_attribute(&self.id));
    }
    if !self.class.is_empty() {
      let _ = write!(
        html,
        " class=\"{}\"",
        encode_double_quoted_attribute(&self.class)
      );
    }
    let _ = write!(
      html,
      " aria-level=\"{}\">{}</{tag}>",
      self.aria_level,
      encode_text(&self.text)
    );

    html
  }
}

/// Wrap a heading and its body in a `<section>` labelled by the heading.
///
/// `body_html` is inserted as-is.
#[must_use]
pub fn render_section(heading: &HeadingNode, body_html: &str) -> String {
  let open = if heading.id.is_empty() {
    "<section>".to_string()
  } else {
    format!(
      "<section aria-labelledby=\"{}\">",
      encode_double_quoted_attribute(&heading.id)
    )
  };

  format!("{open}\n{}\n{body_html}\n</section>", heading.to_html())
}
