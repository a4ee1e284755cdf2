//! Tag descriptors handed to whatever inserts tags into the document head.
use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered map from a namespaced tag name to its content.
pub type TagSet = IndexMap<String, String>;

/// MIME type of JSON-LD script payloads.
pub const JSON_LD_TYPE: &str = "application/ld+json";

/// A `<meta>` tag.
///
/// The well-known attributes have their own fields; anything else goes in
/// `extra` and is rendered after them in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MetaTag {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub property: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub http_equiv: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub charset: Option<String>,

  pub content: String,

  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub extra: IndexMap<String, String>,
}

impl MetaTag {
  /// `<meta name="..." content="...">`
  #[must_use]
  pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      content: content.into(),
      ..Self::default()
    }
  }

  /// `<meta property="..." content="...">`
  #[must_use]
  pub fn property(
    property: impl Into<String>,
    content: impl Into<String>,
  ) -> Self {
    Self {
      property: Some(property.into()),
      content: content.into(),
      ..Self::default()
    }
  }

  /// The attribute that identifies this tag, for lookups.
  #[must_use]
  pub fn key(&self) -> Option<&str> {
    self
      .name
      .as_deref()
      .or(self.property.as_deref())
      .or(self.http_equiv.as_deref())
  }

  fn render(&self, out: &mut String) {
    out.push_str("<meta");
    push_attr(out, "charset", self.charset.as_deref());
    push_attr(out, "name", self.name.as_deref());
    push_attr(out, "property", self.property.as_deref());
    push_attr(out, "http-equiv", self.http_equiv.as_deref());
    if self.charset.is_none() || !self.content.is_empty() {
      push_attr(out, "content", Some(&self.content));
    }
    push_extra(out, &self.extra);
    out.push_str(" />");
  }
}

/// A `<link>` tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LinkTag {
  pub rel: String,

  pub href: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub hreflang: Option<String>,

  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub media_type: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub sizes: Option<String>,

  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub extra: IndexMap<String, String>,
}

impl LinkTag {
  #[must_use]
  pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
    Self {
      rel: rel.into(),
      href: href.into(),
      ..Self::default()
    }
  }

  fn render(&self, out: &mut String) {
    out.push_str("<link");
    push_attr(out, "rel", Some(&self.rel));
    push_attr(out, "href", Some(&self.href));
    push_attr(out, "hreflang", self.hreflang.as_deref());
    push_attr(out, "type", self.media_type.as_deref());
    push_attr(out, "sizes", self.sizes.as_deref());
    push_extra(out, &self.extra);
    out.push_str(" />");
  }
}

/// One element destined for the document head.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum HeadTag {
  Title { text: String },
  Meta(MetaTag),
  Link(LinkTag),
  Script {
    #[serde(rename = "type")]
    kind: String,
    body: String,
  },
}

impl HeadTag {
  /// Render this descriptor as HTML.
  #[must_use]
  pub fn to_html(&self) -> String {
    let mut html = String::new();
    match self {
      Self::Title { text } => {
        let _ = write!(html, "<title>{}</title>", encode_text(text));
      },
      Self::Meta(meta) => meta.render(&mut html),
      Self::Link(link) => link.render(&mut html),
      Self::Script { kind, body } => {
        // The body is trusted: JSON-LD payloads are escaped when built
        let _ = write!(
          html,
          "<script type=\"{}\">{body}</script>",
          encode_double_quoted_attribute(kind)
        );
      },
    }
    html
  }
}

/// Convert a tag map into meta descriptors.
///
/// Open Graph style keys (`og:*`, `article:*`, and the other RDFa prefixes
/// Facebook reads) use the `property` attribute; everything else uses
/// `name`.
#[must_use]
pub fn tags_from_set(tags: &TagSet) -> Vec<HeadTag> {
  tags
    .iter()
    .map(|(key, value)| {
      if uses_property_attribute(key) {
        HeadTag::Meta(MetaTag::property(key, value))
      } else {
        HeadTag::Meta(MetaTag::name(key, value))
      }
    })
    .collect()
}

/// Whether a meta key belongs to the Open Graph protocol namespaces.
#[must_use]
pub fn uses_property_attribute(key: &str) -> bool {
  const PREFIXES: [&str; 5] = ["og:", "article:", "book:", "profile:", "fb:"];
  PREFIXES.iter().any(|prefix| key.starts_with(prefix))
}

/// Render a list of descriptors, one per line.
#[must_use]
pub fn render_head_html(tags: &[HeadTag]) -> String {
  tags
    .iter()
    .map(HeadTag::to_html)
    .collect::<Vec<_>>()
    .join("\n")
}

/// Whether `name` can be written as an attribute name without escaping:
/// `[A-Za-z_:][-A-Za-z0-9_:.]*`.
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
  let mut chars = name.chars();
  chars
    .next()
    .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == ':')
    && chars.all(|c| {
      c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
    })
}

/// Passthrough attributes. Names that are not valid attribute names are
/// dropped, since only values are escaped.
fn push_extra(out: &mut String, extra: &IndexMap<String, String>) {
  for (key, value) in extra {
    if is_valid_attribute_name(key) {
      push_attr(out, key, Some(value));
    } else {
      log::warn!("Skipping invalid attribute name '{key}'");
    }
  }
}

fn push_attr(out: &mut String, key: &str, value: Option<&str>) {
  if let Some(value) = value {
    let _ = write!(
      out,
      " {key}=\"{}\"",
      encode_double_quoted_attribute(value)
    );
  }
}
