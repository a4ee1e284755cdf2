//! Meta tags aimed at AI assistants and LLM crawlers.
//!
//! Two flavours exist. [`ai_meta_tags`] derives a fixed-shape map across the
//! `ai:`, `llm:` and `semantic:` namespaces from a [`ContentConfig`].
//! [`AiMeta`] describes a page explicitly and only emits the fields that are
//! set.
use serde::{Deserialize, Serialize};
use seomark_config::{Complexity, ContentConfig};

use crate::{
  context::RenderContext,
  head::{MetaTag, TagSet},
  social::insert,
};

/// AI/LLM/semantic tags for a content page. Every key is always present.
///
/// List values are joined with `", "`, so splitting a value on commas and
/// trimming recovers the entries.
#[must_use]
pub fn ai_meta_tags(content: &ContentConfig, ctx: &RenderContext) -> TagSet {
  let branding = &content.branding;
  let audience = content.audience().join(", ");
  let keywords = content.keywords().join(", ");
  let path = ctx.path(content.pathname.as_deref());

  let mut tags = TagSet::new();
  insert(&mut tags, "ai:content-type", content.content_type.as_str());
  insert(&mut tags, "ai:category", &content.category);
  insert(&mut tags, "ai:complexity", content.complexity.as_str());
  insert(&mut tags, "ai:audience", &audience);
  insert(&mut tags, "ai:keywords", &keywords);
  insert(&mut tags, "ai:reading-time", content.reading_time().to_string());
  insert(
    &mut tags,
    "ai:last-updated",
    ctx.timestamp(content.last_updated).to_string(),
  );
  insert(&mut tags, "ai:related-topics", content.related_topics.join(", "));
  insert(&mut tags, "llm:title", &content.title);
  insert(&mut tags, "llm:summary", &content.description);
  insert(
    &mut tags,
    "llm:context",
    format!(
      "{} {} about {} for {}",
      content.complexity.label(),
      content.content_type.as_str(),
      content.category,
      if audience.is_empty() {
        "all readers"
      } else {
        audience.as_str()
      }
    ),
  );
  insert(&mut tags, "semantic:topic", &content.category);
  insert(&mut tags, "semantic:keywords", keywords);
  insert(&mut tags, "semantic:entity", &branding.app_name);
  insert(&mut tags, "semantic:url", branding.url_for(path));
  tags
}

/// Explicit AI-facing description of a page.
///
/// `content_type`, `summary` and `complexity` are always emitted. Every other
/// field is emitted only when set, and lists only when non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AiMeta {
  pub content_type: String,

  pub summary: String,

  /// Defaults to `intermediate`.
  pub complexity: Option<Complexity>,

  pub blockchain_networks: Vec<String>,

  pub token_required: Option<bool>,

  pub wallet_required: Option<bool>,

  pub use_cases: Vec<String>,

  pub audience: Vec<String>,

  pub integrations: Vec<String>,

  pub features: Vec<String>,

  pub data_flow: Option<String>,

  pub business_value: Option<String>,

  pub security_considerations: Vec<String>,

  pub learning_outcomes: Vec<String>,
}

impl AiMeta {
  #[must_use]
  pub fn new(content_type: impl Into<String>, summary: impl Into<String>) -> Self {
    Self {
      content_type: content_type.into(),
      summary: summary.into(),
      ..Self::default()
    }
  }

  /// Build the meta tags, in field declaration order.
  ///
  /// List entries are joined with `","` without escaping, so entries that
  /// themselves contain commas cannot be told apart afterwards.
  #[must_use]
  pub fn to_meta_tags(&self) -> Vec<MetaTag> {
    let mut tags = vec![
      MetaTag::name("ai:content-type", &self.content_type),
      MetaTag::name("ai:summary", &self.summary),
      MetaTag::name(
        "ai:complexity",
        self.complexity.unwrap_or_default().as_str(),
      ),
    ];

    push_list(&mut tags, "ai:blockchain-networks", &self.blockchain_networks);
    push_bool(&mut tags, "ai:token-required", self.token_required);
    push_bool(&mut tags, "ai:wallet-required", self.wallet_required);
    push_list(&mut tags, "ai:use-cases", &self.use_cases);
    push_list(&mut tags, "ai:audience", &self.audience);
    push_list(&mut tags, "ai:integrations", &self.integrations);
    push_list(&mut tags, "ai:features", &self.features);
    push_text(&mut tags, "ai:data-flow", self.data_flow.as_deref());
    push_text(&mut tags, "ai:business-value", self.business_value.as_deref());
    push_list(
      &mut tags,
      "ai:security-considerations",
      &self.security_considerations,
    );
    push_list(&mut tags, "ai:learning-outcomes", &self.learning_outcomes);

    tags
  }
}

fn push_list(tags: &mut Vec<MetaTag>, name: &str, values: &[String]) {
  if !values.is_empty() {
    tags.push(MetaTag::name(name, values.join(",")));
  }
}

fn push_bool(tags: &mut Vec<MetaTag>, name: &str, value: Option<bool>) {
  if let Some(value) = value {
    tags.push(MetaTag::name(name, value.to_string()));
  }
}

fn push_text(tags: &mut Vec<MetaTag>, name: &str, value: Option<&str>) {
  if let Some(value) = value {
    tags.push(MetaTag::name(name, value));
  }
}
