use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Site-wide meta tag configuration for HTML head injection.
///
/// Tags listed here are appended to every generated head after the tags the
/// page itself produces, in the order they appear in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MetaConfig {
  /// `OpenGraph` tags (e.g., `{"og:locale": "...", "fb:app_id": "..."}`)
  pub opengraph: Option<IndexMap<String, String>>,

  /// Additional meta tags (e.g., `{"author": "...", "theme-color": "..."}`)
  pub tags: Option<IndexMap<String, String>>,
}

impl MetaConfig {
  /// Merge another meta config into this one, with `other` overriding
  /// individual keys.
  pub fn merge(&mut self, other: Self) {
    merge_map(&mut self.opengraph, other.opengraph);
    merge_map(&mut self.tags, other.tags);
  }
}

fn merge_map(
  base: &mut Option<IndexMap<String, String>>,
  other: Option<IndexMap<String, String>>,
) {
  if let Some(other) = other {
    match base {
      Some(existing) => existing.extend(other),
      None => *base = Some(other),
    }
  }
}
