use std::fmt;

use jiff::Timestamp;
use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer,
  de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

use crate::branding::BrandingConfig;

/// Reading time assumed when a page does not declare one, in minutes.
pub const DEFAULT_READING_TIME: u32 = 5;

/// A field that accepts either a comma-separated string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringOrList {
  Text(String),
  List(Vec<String>),
}

impl Default for StringOrList {
  fn default() -> Self {
    Self::List(Vec::new())
  }
}

impl StringOrList {
  /// Normalize into a list.
  ///
  /// Lists are returned as-is. Strings are split on commas, each segment is
  /// trimmed and empty segments are dropped.
  #[must_use]
  pub fn to_list(&self) -> Vec<String> {
    match self {
      Self::List(items) => items.clone(),
      Self::Text(text) => {
        text
          .split(',')
          .map(str::trim)
          .filter(|segment| !segment.is_empty())
          .map(ToString::to_string)
          .collect()
      },
    }
  }

  /// Whether normalization would produce no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    match self {
      Self::List(items) => items.is_empty(),
      Self::Text(text) => text.split(',').all(|s| s.trim().is_empty()),
    }
  }
}

impl From<&str> for StringOrList {
  fn from(value: &str) -> Self {
    Self::Text(value.to_string())
  }
}

impl From<String> for StringOrList {
  fn from(value: String) -> Self {
    Self::Text(value)
  }
}

impl From<Vec<String>> for StringOrList {
  fn from(value: Vec<String>) -> Self {
    Self::List(value)
  }
}

impl From<&[&str]> for StringOrList {
  fn from(value: &[&str]) -> Self {
    Self::List(value.iter().map(ToString::to_string).collect())
  }
}

impl Serialize for StringOrList {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Self::Text(text) => serializer.serialize_str(text),
      Self::List(items) => items.serialize(serializer),
    }
  }
}

/// Accepts a string or a sequence of strings. Any other shape is read as an
/// empty list rather than rejected.
impl<'de> Deserialize<'de> for StringOrList {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct StringOrListVisitor;

    impl<'de> Visitor<'de> for StringOrListVisitor {
      type Value = StringOrList;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a comma-separated string or a list of strings")
      }

      fn visit_str<E>(self, value: &str) -> Result<StringOrList, E>
      where
        E: de::Error,
      {
        Ok(StringOrList::Text(value.to_string()))
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<StringOrList, A::Error>
      where
        A: SeqAccess<'de>,
      {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<String>()? {
          items.push(item);
        }
        Ok(StringOrList::List(items))
      }

      fn visit_map<M>(self, mut map: M) -> Result<StringOrList, M::Error>
      where
        M: MapAccess<'de>,
      {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(StringOrList::default())
      }

      fn visit_bool<E>(self, _: bool) -> Result<StringOrList, E>
      where
        E: de::Error,
      {
        Ok(StringOrList::default())
      }

      fn visit_i64<E>(self, _: i64) -> Result<StringOrList, E>
      where
        E: de::Error,
      {
        Ok(StringOrList::default())
      }

      fn visit_u64<E>(self, _: u64) -> Result<StringOrList, E>
      where
        E: de::Error,
      {
        Ok(StringOrList::default())
      }

      fn visit_f64<E>(self, _: f64) -> Result<StringOrList, E>
      where
        E: de::Error,
      {
        Ok(StringOrList::default())
      }

      fn visit_unit<E>(self) -> Result<StringOrList, E>
      where
        E: de::Error,
      {
        Ok(StringOrList::default())
      }

      fn visit_none<E>(self) -> Result<StringOrList, E>
      where
        E: de::Error,
      {
        Ok(StringOrList::default())
      }
    }

    deserializer.deserialize_any(StringOrListVisitor)
  }
}

/// How demanding a page's content is.
#[derive(
  Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
  Beginner,
  #[default]
  Intermediate,
  Advanced,
}

impl Complexity {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Beginner => "beginner",
      Self::Intermediate => "intermediate",
      Self::Advanced => "advanced",
    }
  }

  /// Human-readable label, as shown in Twitter card data fields.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Beginner => "Beginner",
      Self::Intermediate => "Intermediate",
      Self::Advanced => "Advanced",
    }
  }

  /// schema.org `proficiencyLevel` value.
  #[must_use]
  pub const fn proficiency_level(self) -> &'static str {
    match self {
      Self::Beginner => "Beginner",
      Self::Intermediate => "Intermediate",
      Self::Advanced => "Expert",
    }
  }
}

impl fmt::Display for Complexity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Kind of page the metadata describes.
#[derive(
  Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
  #[default]
  Guide,
  Reference,
  Tutorial,
  Overview,
  Feature,
}

impl ContentType {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Guide => "guide",
      Self::Reference => "reference",
      Self::Tutorial => "tutorial",
      Self::Overview => "overview",
      Self::Feature => "feature",
    }
  }

  /// Whether the page reads as an article rather than a landing page.
  #[must_use]
  pub const fn is_article(self) -> bool {
    matches!(self, Self::Guide | Self::Reference | Self::Tutorial)
  }
}

impl fmt::Display for ContentType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Per-page content description consumed by the tag and schema generators.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
  pub title: String,

  pub description: String,

  pub keywords: StringOrList,

  pub category: String,

  pub audience: StringOrList,

  pub complexity: Complexity,

  pub content_type: ContentType,

  /// Estimated reading time in minutes.
  pub reading_time: Option<u32>,

  pub last_updated: Option<Timestamp>,

  pub related_topics: Vec<String>,

  pub branding: BrandingConfig,

  /// Path of the page, overriding the render context's current path.
  pub pathname: Option<String>,
}

impl ContentConfig {
  /// Normalized keyword list.
  #[must_use]
  pub fn keywords(&self) -> Vec<String> {
    self.keywords.to_list()
  }

  /// Normalized audience list.
  #[must_use]
  pub fn audience(&self) -> Vec<String> {
    self.audience.to_list()
  }

  /// Reading time in minutes, or [`DEFAULT_READING_TIME`].
  #[must_use]
  pub fn reading_time(&self) -> u32 {
    self.reading_time.unwrap_or(DEFAULT_READING_TIME)
  }
}
