//! schema.org JSON-LD generators.
//!
//! Each generator returns a self-contained object graph with `@context` and
//! `@type` at the top level. Fields that depend on the clock take the time
//! from the [`RenderContext`] unless the content carries `last_updated`.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use seomark_config::{BrandingConfig, ContentConfig};

use crate::{
  context::RenderContext,
  seo::default_image_url,
  utils::join_non_empty,
};

/// Value of `@context` on every top-level object.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Category assigned to FAQ entries that do not declare one.
pub const DEFAULT_FAQ_CATEGORY: &str = "General";

/// One question and answer for [`faq_schema`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqItem {
  pub question: String,

  pub answer: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,

  /// Only emitted when set. Never derived.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub upvote_count: Option<u64>,
}

impl FaqItem {
  #[must_use]
  pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
    Self {
      question:     question.into(),
      answer:       answer.into(),
      category:     None,
      upvote_count: None,
    }
  }
}

/// `SoftwareApplication` describing the product itself.
#[must_use]
pub fn software_application_schema(content: &ContentConfig) -> Value {
  let branding = &content.branding;
  let category = if content.category.is_empty() {
    "WebApplication"
  } else {
    content.category.as_str()
  };

  let mut schema = object(json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "SoftwareApplication",
    "name": branding.app_name,
    "description": content.description,
    "url": branding.base_url,
    "applicationCategory": category,
    "operatingSystem": "Web",
    "offers": {
      "@type": "Offer",
      "price": "0",
      "priceCurrency": "USD",
    },
  }));

  insert_keywords(&mut schema, content);
  insert_audience(&mut schema, content);
  schema.insert("publisher".to_string(), organization_ref(branding));
  Value::Object(schema)
}

/// `TechnicalArticle` for documentation-style pages.
#[must_use]
pub fn technical_article_schema(
  content: &ContentConfig,
  ctx: &RenderContext,
) -> Value {
  let branding = &content.branding;
  let url = branding.url_for(ctx.path(content.pathname.as_deref()));

  let mut schema = object(json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "TechnicalArticle",
    "headline": content.title,
    "description": content.description,
    "url": url,
    "image": default_image_url(branding),
    "author": organization_ref(branding),
    "publisher": publisher_with_logo(branding),
    "dateModified": ctx.timestamp(content.last_updated).to_string(),
    "mainEntityOfPage": {
      "@type": "WebPage",
      "@id": url,
    },
    "articleSection": content.category,
    "proficiencyLevel": content.complexity.proficiency_level(),
    "timeRequired": format!("PT{}M", content.reading_time()),
  }));

  insert_keywords(&mut schema, content);
  insert_audience(&mut schema, content);
  if !content.related_topics.is_empty() {
    schema.insert("about".to_string(), things(&content.related_topics));
  }
  Value::Object(schema)
}

/// `FAQPage` with one `Question` per item.
#[must_use]
pub fn faq_schema(items: &[FaqItem]) -> Value {
  let questions: Vec<Value> = items
    .iter()
    .map(|item| {
      let mut question = object(json!({
        "@type": "Question",
        "name": item.question,
        "acceptedAnswer": {
          "@type": "Answer",
          "text": item.answer,
        },
        "about": {
          "@type": "Thing",
          "name": item.category.as_deref().unwrap_or(DEFAULT_FAQ_CATEGORY),
        },
      }));
      if let Some(count) = item.upvote_count {
        question.insert("upvoteCount".to_string(), json!(count));
      }
      Value::Object(question)
    })
    .collect();

  json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "FAQPage",
    "mainEntity": questions,
  })
}

/// `WebPage` carrying the semantic hints AI crawlers use: audience,
/// complexity, speakable sections and mentioned topics.
#[must_use]
pub fn webpage_schema(content: &ContentConfig, ctx: &RenderContext) -> Value {
  let branding = &content.branding;
  let url = branding.url_for(ctx.path(content.pathname.as_deref()));

  let mut schema = object(json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "WebPage",
    "name": content.title,
    "description": content.description,
    "url": url,
    "isPartOf": {
      "@type": "WebSite",
      "name": branding.app_name,
      "url": branding.base_url,
    },
    "about": {
      "@type": "Thing",
      "name": content.category,
    },
    "dateModified": ctx.timestamp(content.last_updated).to_string(),
    "educationalLevel": content.complexity.as_str(),
    "learningResourceType": content.content_type.as_str(),
    "timeRequired": format!("PT{}M", content.reading_time()),
    "speakable": {
      "@type": "SpeakableSpecification",
      "cssSelector": ["h1", "[data-speakable]"],
    },
    "publisher": organization_ref(branding),
  }));

  insert_keywords(&mut schema, content);
  insert_audience(&mut schema, content);
  if !content.related_topics.is_empty() {
    schema.insert("mentions".to_string(), things(&content.related_topics));
  }
  Value::Object(schema)
}

/// `Organization` for the site owner, with a support contact point.
#[must_use]
pub fn organization_schema(branding: &BrandingConfig) -> Value {
  let mut schema = object(json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "Organization",
    "name": branding.app_name,
    "url": branding.base_url,
    "logo": branding.url_for("/logo.png"),
    "contactPoint": {
      "@type": "ContactPoint",
      "contactType": "customer support",
      "email": format!("support@{}", branding.email_domain()),
    },
  }));

  let handle = branding.twitter_handle().trim_start_matches('@');
  if !handle.is_empty() {
    schema.insert(
      "sameAs".to_string(),
      json!([format!("https://twitter.com/{handle}")]),
    );
  }
  Value::Object(schema)
}

/// `BreadcrumbList` derived from the segments of `path`, starting at the
/// site root.
#[must_use]
pub fn breadcrumb_schema(branding: &BrandingConfig, path: &str) -> Value {
  let mut items = vec![json!({
    "@type": "ListItem",
    "position": 1,
    "name": "Home",
    "item": branding.url_for("/"),
  })];

  let mut current = String::new();
  for segment in path.split('/').filter(|s| !s.is_empty()) {
    current.push('/');
    current.push_str(segment);
    let position = items.len() + 1;
    items.push(json!({
      "@type": "ListItem",
      "position": position,
      "name": segment_title(segment),
      "item": branding.url_for(&current),
    }));
  }

  json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "BreadcrumbList",
    "itemListElement": items,
  })
}

fn object(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(map) => map,
    _ => Map::new(),
  }
}

fn organization_ref(branding: &BrandingConfig) -> Value {
  json!({
    "@type": "Organization",
    "name": branding.app_name,
    "url": branding.base_url,
  })
}

fn publisher_with_logo(branding: &BrandingConfig) -> Value {
  json!({
    "@type": "Organization",
    "name": branding.app_name,
    "url": branding.base_url,
    "logo": {
      "@type": "ImageObject",
      "url": branding.url_for("/logo.png"),
    },
  })
}

fn things(names: &[String]) -> Value {
  names
    .iter()
    .map(|name| json!({ "@type": "Thing", "name": name }))
    .collect()
}

fn insert_keywords(schema: &mut Map<String, Value>, content: &ContentConfig) {
  let keywords = content.keywords();
  if !keywords.is_empty() {
    schema.insert("keywords".to_string(), json!(keywords.join(", ")));
  }
}

fn insert_audience(schema: &mut Map<String, Value>, content: &ContentConfig) {
  let audience = content.audience();
  if !audience.is_empty() {
    schema.insert(
      "audience".to_string(),
      json!({
        "@type": "Audience",
        "audienceType": join_non_empty(&audience, ", "),
      }),
    );
  }
}

/// `getting-started_guide` → `Getting Started Guide`
fn segment_title(segment: &str) -> String {
  segment
    .split(['-', '_'])
    .filter(|word| !word.is_empty())
    .map(|word| {
      let mut chars = word.chars();
      chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().collect::<String>() + chars.as_str()
      })
    })
    .collect::<Vec<_>>()
    .join(" ")
}
