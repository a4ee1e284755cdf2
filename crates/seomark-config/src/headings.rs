use serde::{Deserialize, Serialize};

/// Class tables used when composing heading class strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeadingsConfig {
  /// Base classes for `h1` through `h6`, in order. Must hold exactly six
  /// entries.
  pub levels: Vec<String>,

  /// Modifier classes per semantic context.
  pub contexts: ContextClasses,
}

/// Modifier class per semantic heading context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContextClasses {
  pub page_title: String,
  pub section:    String,
  pub subsection: String,
  pub feature:    String,
  pub benefit:    String,
  pub step:       String,
}

impl Default for HeadingsConfig {
  fn default() -> Self {
    Self {
      levels:   [
        "text-4xl font-bold tracking-tight",
        "text-3xl font-semibold tracking-tight",
        "text-2xl font-semibold",
        "text-xl font-medium",
        "text-lg font-medium",
        "text-base font-medium",
      ]
      .map(String::from)
      .to_vec(),
      contexts: ContextClasses::default(),
    }
  }
}

impl Default for ContextClasses {
  fn default() -> Self {
    Self {
      page_title: "mb-6 text-foreground".to_string(),
      section:    "mt-10 mb-4 text-foreground".to_string(),
      subsection: "mt-6 mb-3 text-foreground".to_string(),
      feature:    "mb-2 text-primary".to_string(),
      benefit:    "mb-2 text-emerald-600".to_string(),
      step:       "mb-2 text-muted-foreground".to_string(),
    }
  }
}

impl HeadingsConfig {
  /// Base class for a heading level, or `None` outside 1-6.
  #[must_use]
  pub fn level_class(&self, level: u8) -> Option<&str> {
    let index = usize::from(level).checked_sub(1)?;
    self.levels.get(index).map(String::as_str)
  }
}
