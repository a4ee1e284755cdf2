//! Open Graph and Twitter Card tag maps for a content page.
//!
//! Every key is always present so the maps have a fixed shape; callers that
//! want to drop empty values filter afterwards.
use seomark_config::ContentConfig;

use crate::{
  context::RenderContext,
  head::TagSet,
  seo::{compose_title, default_image_url},
};

/// Open Graph tags for a content page.
#[must_use]
pub fn open_graph_tags(content: &ContentConfig, ctx: &RenderContext) -> TagSet {
  let branding = &content.branding;
  let title = compose_title(Some(content.title.as_str()), &branding.app_name);
  let path = ctx.path(content.pathname.as_deref());
  let og_type = if content.content_type.is_article() {
    "article"
  } else {
    "website"
  };

  let mut tags = TagSet::new();
  insert(&mut tags, "og:type", og_type);
  insert(&mut tags, "og:title", &title);
  insert(&mut tags, "og:description", &content.description);
  insert(&mut tags, "og:url", branding.url_for(path));
  insert(&mut tags, "og:site_name", &branding.app_name);
  insert(&mut tags, "og:image", default_image_url(branding));
  insert(&mut tags, "og:image:alt", &title);
  insert(&mut tags, "article:section", &content.category);
  insert(&mut tags, "article:tag", content.keywords().join(", "));
  insert(
    &mut tags,
    "article:modified_time",
    ctx.timestamp(content.last_updated).to_string(),
  );
  insert(&mut tags, "article:author", &branding.app_name);
  tags
}

/// Twitter Card tags for a content page, including the two label/data pairs
/// (difficulty and reading time) that Twitter shows under the preview.
#[must_use]
pub fn twitter_card_tags(content: &ContentConfig) -> TagSet {
  let branding = &content.branding;
  let title = compose_title(Some(content.title.as_str()), &branding.app_name);
  let handle = branding.twitter_handle();

  let mut tags = TagSet::new();
  insert(&mut tags, "twitter:card", "summary_large_image");
  insert(&mut tags, "twitter:site", handle);
  insert(&mut tags, "twitter:creator", handle);
  insert(&mut tags, "twitter:title", &title);
  insert(&mut tags, "twitter:description", &content.description);
  insert(&mut tags, "twitter:image", default_image_url(branding));
  insert(&mut tags, "twitter:image:alt", &title);
  insert(&mut tags, "twitter:label1", "Difficulty");
  insert(&mut tags, "twitter:data1", content.complexity.label());
  insert(&mut tags, "twitter:label2", "Reading time");
  insert(
    &mut tags,
    "twitter:data2",
    format!("{} min", content.reading_time()),
  );
  tags
}

pub(crate) fn insert(tags: &mut TagSet, key: &str, value: impl Into<String>) {
  tags.insert(key.to_string(), value.into());
}
