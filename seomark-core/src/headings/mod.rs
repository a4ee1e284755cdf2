//! Semantic heading generation and heading-hierarchy validation.
//!
//! A [`HeadingDescriptor`] describes one heading as authored. The generator
//! turns it into a [`HeadingNode`] with a stable ID, composed classes and an
//! explicit `aria-level`; the validator checks a whole sequence of
//! descriptors against the structural rules search engines and screen
//! readers expect.
mod generate;
mod validate;

use serde::{Deserialize, Serialize};

pub use self::{
  generate::{HeadingGenerator, generate_heading, render_section},
  validate::{
    MAX_HEADING_LENGTH,
    MIN_HEADING_LENGTH,
    validate_heading_structure,
  },
};
use crate::utils::slugify;

/// Where a heading sits in the page, used to pick a modifier class.
#[derive(
  Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticContext {
  PageTitle,
  #[default]
  Section,
  Subsection,
  Feature,
  Benefit,
  Step,
}

impl SemanticContext {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::PageTitle => "page-title",
      Self::Section => "section",
      Self::Subsection => "subsection",
      Self::Feature => "feature",
      Self::Benefit => "benefit",
      Self::Step => "step",
    }
  }
}

/// A heading as authored by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingDescriptor {
  /// Heading level (1-6).
  pub level: u8,

  pub text: String,

  /// Explicit ID; derived from `text` when absent.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,

  /// Extra classes appended after the level and context classes.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub class_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub context: Option<SemanticContext>,
}

impl HeadingDescriptor {
  #[must_use]
  pub fn new(level: u8, text: impl Into<String>) -> Self {
    Self {
      level,
      text: text.into(),
      id: None,
      class_name: None,
      context: None,
    }
  }

  #[must_use]
  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  #[must_use]
  pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
    self.class_name = Some(class_name.into());
    self
  }

  #[must_use]
  pub const fn with_context(mut self, context: SemanticContext) -> Self {
    self.context = Some(context);
    self
  }

  /// The explicit ID if one was given, otherwise the slug of the text.
  #[must_use]
  pub fn resolved_id(&self) -> String {
    self.id.clone().unwrap_or_else(|| slugify(&self.text))
  }
}

/// A heading ready to be rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingNode {
  pub level: u8,

  pub id: String,

  /// Space-separated class list.
  pub class: String,

  /// Value of the `aria-level` attribute; always equal to `level`.
  pub aria_level: u8,

  pub text: String,
}

impl HeadingNode {
  /// Element name, `h1` through `h6`.
  #[must_use]
  pub fn tag(&self) -> String {
    format!("h{}", self.level)
  }
}

/// Findings from [`validate_heading_structure`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeadingReport {
  /// `true` iff `errors` is empty.
  pub is_valid: bool,

  pub errors: Vec<String>,

  /// Advisory findings that never affect `is_valid`.
  pub suggestions: Vec<String>,
}
