//! Page-level head assembly: title, description, canonical URL, social
//! previews and structured-data scripts.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use seomark_config::{BrandingConfig, Config, StringOrList};

use crate::{
  error::SeoResult,
  head::{HeadTag, JSON_LD_TYPE, LinkTag, MetaTag},
};

/// One structured-data object or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StructuredDataInput {
  Many(Vec<Value>),
  One(Value),
}

impl StructuredDataInput {
  /// Normalize into a list: a single object becomes a one-element list and
  /// a JSON array is passed through element by element.
  #[must_use]
  pub fn into_list(self) -> Vec<Value> {
    match self {
      Self::Many(values) | Self::One(Value::Array(values)) => values,
      Self::One(value) => vec![value],
    }
  }
}

impl From<Value> for StructuredDataInput {
  fn from(value: Value) -> Self {
    match value {
      Value::Array(values) => Self::Many(values),
      value => Self::One(value),
    }
  }
}

impl From<Vec<Value>> for StructuredDataInput {
  fn from(values: Vec<Value>) -> Self {
    Self::Many(values)
  }
}

/// Per-page overrides for the generated head.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PageSeo {
  pub title: Option<String>,

  pub description: Option<String>,

  pub keywords: StringOrList,

  /// Path appended to the base URL to form the canonical URL. No canonical
  /// link is emitted without it.
  #[serde(alias = "canonical")]
  pub canonical_path: Option<String>,

  pub og_type: Option<String>,

  pub og_image: Option<String>,

  pub robots: Option<String>,

  pub twitter_card: Option<String>,

  pub twitter_handle: Option<String>,

  pub structured_data: Option<StructuredDataInput>,

  /// Extra meta tags, emitted after the generated ones.
  pub meta: Vec<MetaTag>,

  /// Extra link tags, emitted after the meta tags.
  pub links: Vec<LinkTag>,
}

/// `"{title} | {app_name}"`, or `app_name` alone when there is no title.
///
/// The title is trimmed first, and a blank title counts as no title, so
/// `Some("  ")` yields the bare `app_name`.
#[must_use]
pub fn compose_title(title: Option<&str>, app_name: &str) -> String {
  match title.map(str::trim).filter(|t| !t.is_empty()) {
    Some(title) => format!("{title} | {app_name}"),
    None => app_name.to_string(),
  }
}

/// `base_url + path`, with no slash normalization.
#[must_use]
pub fn canonical_url(branding: &BrandingConfig, path: &str) -> String {
  branding.url_for(path)
}

/// Image used when neither the page nor the config provides one.
#[must_use]
pub fn default_image_url(branding: &BrandingConfig) -> String {
  branding.url_for("/og-image.png")
}

/// Page description, then config default. `None` when neither is set.
#[must_use]
pub fn resolve_description(page: &PageSeo, config: &Config) -> Option<String> {
  first_non_empty([
    page.description.as_deref(),
    config.default_description.as_deref(),
  ])
}

/// Page image, then config default, then `{base_url}/og-image.png`.
#[must_use]
pub fn resolve_image(page: &PageSeo, config: &Config) -> String {
  first_non_empty([page.og_image.as_deref(), config.default_image.as_deref()])
    .unwrap_or_else(|| default_image_url(&config.branding))
}

/// Page handle, then branding handle. `None` when neither is set.
#[must_use]
pub fn resolve_twitter_handle(
  page: &PageSeo,
  config: &Config,
) -> Option<String> {
  first_non_empty([
    page.twitter_handle.as_deref(),
    config.branding.twitter_handle.as_deref(),
  ])
}

/// Normalize optional structured data into a list of objects.
#[must_use]
pub fn structured_data_list(input: Option<&StructuredDataInput>) -> Vec<Value> {
  input.cloned().map(StructuredDataInput::into_list).unwrap_or_default()
}

/// Serialize one structured-data object into a JSON-LD script descriptor.
///
/// `</` is written as `<\/` so the payload cannot close the script element.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn json_ld_script(value: &Value) -> SeoResult<HeadTag> {
  let body = serde_json::to_string(value)?.replace("</", "<\\/");
  Ok(HeadTag::Script {
    kind: JSON_LD_TYPE.to_string(),
    body,
  })
}

/// Build every head tag for a page.
///
/// Order: title, description, keywords, robots, canonical link, Open Graph,
/// Twitter, site-wide config tags, page meta tags, page link tags, then one
/// JSON-LD script per structured-data object. Tags whose value does not
/// resolve are left out.
///
/// # Errors
///
/// Returns an error if a structured-data object cannot be serialized.
pub fn build_page_head(
  page: &PageSeo,
  config: &Config,
) -> SeoResult<Vec<HeadTag>> {
  let branding = &config.branding;
  let title = compose_title(page.title.as_deref(), &branding.app_name);
  let description = resolve_description(page, config);
  let image = resolve_image(page, config);
  let canonical = page
    .canonical_path
    .as_deref()
    .map(|path| canonical_url(branding, path));
  let keywords = page.keywords.to_list();

  let mut tags = vec![HeadTag::Title {
    text: title.clone(),
  }];

  if let Some(ref description) = description {
    tags.push(HeadTag::Meta(MetaTag::name("description", description)));
  } else {
    log::debug!("No description for '{title}', omitting description tags");
  }
  if !keywords.is_empty() {
    tags.push(HeadTag::Meta(MetaTag::name("keywords", keywords.join(", "))));
  }
  tags.push(HeadTag::Meta(MetaTag::name(
    "robots",
    page.robots.as_deref().unwrap_or(&config.default_robots),
  )));
  if let Some(ref url) = canonical {
    tags.push(HeadTag::Link(LinkTag::new("canonical", url)));
  }

  // Open Graph
  tags.push(HeadTag::Meta(MetaTag::property(
    "og:type",
    page.og_type.as_deref().unwrap_or(&config.default_og_type),
  )));
  tags.push(HeadTag::Meta(MetaTag::property("og:title", &title)));
  if let Some(ref description) = description {
    tags.push(HeadTag::Meta(MetaTag::property("og:description", description)));
  }
  tags.push(HeadTag::Meta(MetaTag::property("og:image", &image)));
  if let Some(ref url) = canonical {
    tags.push(HeadTag::Meta(MetaTag::property("og:url", url)));
  }
  tags.push(HeadTag::Meta(MetaTag::property(
    "og:site_name",
    &branding.app_name,
  )));

  // Twitter
  tags.push(HeadTag::Meta(MetaTag::name(
    "twitter:card",
    page
      .twitter_card
      .as_deref()
      .unwrap_or(&config.default_twitter_card),
  )));
  if let Some(handle) = resolve_twitter_handle(page, config) {
    tags.push(HeadTag::Meta(MetaTag::name("twitter:site", &handle)));
    tags.push(HeadTag::Meta(MetaTag::name("twitter:creator", handle)));
  }
  tags.push(HeadTag::Meta(MetaTag::name("twitter:title", &title)));
  if let Some(description) = description {
    tags.push(HeadTag::Meta(MetaTag::name("twitter:description", description)));
  }
  tags.push(HeadTag::Meta(MetaTag::name("twitter:image", image)));

  if let Some(ref meta) = config.meta {
    for (key, value) in meta.opengraph.iter().flatten() {
      tags.push(HeadTag::Meta(MetaTag::property(key, value)));
    }
    for (key, value) in meta.tags.iter().flatten() {
      tags.push(HeadTag::Meta(MetaTag::name(key, value)));
    }
  }

  tags.extend(page.meta.iter().cloned().map(HeadTag::Meta));
  tags.extend(page.links.iter().cloned().map(HeadTag::Link));

  for value in structured_data_list(page.structured_data.as_ref()) {
    tags.push(json_ld_script(&value)?);
  }

  Ok(tags)
}

fn first_non_empty<const N: usize>(
  candidates: [Option<&str>; N],
) -> Option<String> {
  candidates
    .into_iter()
    .flatten()
    .find(|value| !value.is_empty())
    .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]

  use serde_json::json;

  use super::*;

  fn config() -> Config {
    Config::with_branding(BrandingConfig::new("MyApp", "https://myapp.io"))
  }

  fn meta_content<'a>(tags: &'a [HeadTag], key: &str) -> Option<&'a str> {
    tags.iter().find_map(|tag| {
      match tag {
        HeadTag::Meta(meta) if meta.key() == Some(key) => {
          Some(meta.content.as_str())
        },
        _ => None,
      }
    })
  }

  #[test]
  fn test_compose_title() {
    assert_eq!(compose_title(Some("Dashboard"), "MyApp"), "Dashboard | MyApp");
    assert_eq!(compose_title(None, "MyApp"), "MyApp");
    assert_eq!(compose_title(Some("  "), "MyApp"), "MyApp");
  }

  #[test]
  fn test_image_fallback_chain() {
    let mut config = config();
    let mut page = PageSeo::default();
    assert_eq!(resolve_image(&page, &config), "https://myapp.io/og-image.png");

    config.default_image = Some("https://cdn.myapp.io/default.png".into());
    assert_eq!(
      resolve_image(&page, &config),
      "https://cdn.myapp.io/default.png"
    );

    page.og_image = Some("https://cdn.myapp.io/page.png".into());
    assert_eq!(resolve_image(&page, &config), "https://cdn.myapp.io/page.png");
  }

  #[test]
  fn test_description_is_omitted_when_unresolved() {
    let tags = build_page_head(&PageSeo::default(), &config()).unwrap();
    assert!(meta_content(&tags, "description").is_none());
    assert!(meta_content(&tags, "og:description").is_none());
    assert!(meta_content(&tags, "twitter:description").is_none());
    assert!(meta_content(&tags, "keywords").is_none());
  }

  #[test]
  fn test_canonical_only_with_path() {
    let tags = build_page_head(&PageSeo::default(), &config()).unwrap();
    assert!(!tags.iter().any(|t| matches!(t, HeadTag::Link(_))));
    assert!(meta_content(&tags, "og:url").is_none());

    let page = PageSeo {
      canonical_path: Some("/docs/".into()),
      ..PageSeo::default()
    };
    let tags = build_page_head(&page, &config()).unwrap();
    assert!(tags.contains(&HeadTag::Link(LinkTag::new(
      "canonical",
      "https://myapp.io/docs/"
    ))));
    assert_eq!(meta_content(&tags, "og:url"), Some("https://myapp.io/docs/"));
  }

  #[test]
  fn test_structured_data_normalization() {
    assert!(structured_data_list(None).is_empty());

    let one = StructuredDataInput::from(json!({"@type": "WebPage"}));
    assert_eq!(structured_data_list(Some(&one)).len(), 1);

    let many = StructuredDataInput::from(vec![json!({"a": 1}), json!({"b": 2})]);
    assert_eq!(structured_data_list(Some(&many)).len(), 2);
  }

  #[test]
  fn test_json_array_value_becomes_one_script_per_element() {
    let input = StructuredDataInput::from(json!([
      {"@type": "A"},
      {"@type": "B"}
    ]));
    assert!(matches!(input, StructuredDataInput::Many(ref v) if v.len() == 2));

    let page = PageSeo {
      structured_data: Some(input),
      ..PageSeo::default()
    };
    let tags = build_page_head(&page, &config()).unwrap();
    let bodies: Vec<&str> = tags
      .iter()
      .filter_map(|tag| {
        match tag {
          HeadTag::Script { body, .. } => Some(body.as_str()),
          _ => None,
        }
      })
      .collect();
    assert_eq!(bodies, [r#"{"@type":"A"}"#, r#"{"@type":"B"}"#]);

    // Built directly as `One`, an array is still split
    let one = StructuredDataInput::One(json!([{"a": 1}, {"b": 2}]));
    assert_eq!(one.into_list().len(), 2);
  }

  #[test]
  fn test_structured_data_input_deserializes_both_shapes() {
    let one: StructuredDataInput =
      serde_json::from_value(json!({"@type": "WebPage"})).unwrap();
    assert!(matches!(one, StructuredDataInput::One(_)));

    let many: StructuredDataInput =
      serde_json::from_value(json!([{"@type": "WebPage"}])).unwrap();
    assert!(matches!(many, StructuredDataInput::Many(ref v) if v.len() == 1));
  }

  #[test]
  fn test_json_ld_script_escapes_closing_tags() {
    let script =
      json_ld_script(&json!({"name": "</script><script>alert(1)"})).unwrap();
    let HeadTag::Script { kind, body } = script else {
      panic!("expected a script tag");
    };
    assert_eq!(kind, "application/ld+json");
    assert!(!body.contains("</script>"));

    // The escaped payload is still the same JSON value
    let parsed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["name"], "</script><script>alert(1)");
  }

  #[test]
  fn test_twitter_handle_omitted_when_empty() {
    let tags = build_page_head(&PageSeo::default(), &config()).unwrap();
    assert!(meta_content(&tags, "twitter:site").is_none());

    let mut config = config();
    config.branding.twitter_handle = Some("@myapp".into());
    let tags = build_page_head(&PageSeo::default(), &config).unwrap();
    assert_eq!(meta_content(&tags, "twitter:site"), Some("@myapp"));
    assert_eq!(meta_content(&tags, "twitter:creator"), Some("@myapp"));
  }
}
