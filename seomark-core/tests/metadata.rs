#![allow(
  clippy::unwrap_used,
  clippy::expect_used,
  reason = "Fine in tests"
)]
use jiff::Timestamp;
use serde_json::{Value, json};
use seomark_config::{BrandingConfig, Config, ContentConfig, ContentType};
use seomark_core::{
  FaqItem,
  HeadTag,
  HeadingDescriptor,
  PageSeo,
  RenderContext,
  StructuredDataInput,
  ai_meta_tags,
  build_page_head,
  faq_schema,
  open_graph_tags,
  render_head_html,
  technical_article_schema,
  twitter_card_tags,
  validate_heading_structure,
  webpage_schema,
};

fn branding() -> BrandingConfig {
  BrandingConfig::new("MyApp", "https://myapp.io")
}

fn fixed_context() -> RenderContext {
  RenderContext::new(
    "/docs/staking",
    "2024-06-01T12:00:00Z".parse::<Timestamp>().unwrap(),
  )
}

fn staking_guide() -> ContentConfig {
  ContentConfig {
    title: "Staking Guide".to_string(),
    description: "Everything about staking".to_string(),
    keywords: vec!["staking".to_string(), "rewards".to_string()].into(),
    category: "DeFi".to_string(),
    audience: "developers, crypto users".into(),
    content_type: ContentType::Tutorial,
    related_topics: vec!["Validators".to_string()],
    branding: branding(),
    ..ContentConfig::default()
  }
}

#[test]
fn test_empty_heading_sequence_has_one_error() {
  let report = validate_heading_structure(&[]);
  assert!(!report.is_valid);
  assert_eq!(report.errors.len(), 1);
  assert!(report.suggestions.is_empty());
}

#[test]
fn test_well_formed_outline_is_valid() {
  let report = validate_heading_structure(&[
    HeadingDescriptor::new(1, "Page Title"),
    HeadingDescriptor::new(2, "Section One"),
    HeadingDescriptor::new(3, "Subsection"),
    HeadingDescriptor::new(2, "Section Two"),
  ]);
  assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn test_level_jump_is_reported() {
  let report = validate_heading_structure(&[
    HeadingDescriptor::new(1, "Title"),
    HeadingDescriptor::new(4, "Jumped to H4"),
  ]);
  assert!(!report.is_valid);
  assert!(
    report
      .errors
      .iter()
      .any(|e| e.contains("H1") && e.contains("H4"))
  );
}

#[test]
fn test_full_head_is_deterministic_and_ordered() {
  let config = Config::with_branding(branding());
  let page = PageSeo {
    title: Some("Dashboard".to_string()),
    description: Some("Your portfolio".to_string()),
    canonical_path: Some("/dashboard".to_string()),
    structured_data: Some(StructuredDataInput::from(webpage_schema(
      &staking_guide(),
      &fixed_context(),
    ))),
    ..PageSeo::default()
  };

  let first = render_head_html(&build_page_head(&page, &config).unwrap());
  let second = render_head_html(&build_page_head(&page, &config).unwrap());
  assert_eq!(first, second);

  let lines: Vec<&str> = first.lines().collect();
  assert_eq!(lines[0], "<title>Dashboard | MyApp</title>");
  assert_eq!(
    lines[1],
    "<meta name=\"description\" content=\"Your portfolio\" />"
  );
  assert!(
    lines
      .last()
      .unwrap()
      .starts_with("<script type=\"application/ld+json\">")
  );
  assert!(first.contains(
    "<link rel=\"canonical\" href=\"https://myapp.io/dashboard\" />"
  ));
}

#[test]
fn test_structured_data_survives_json_round_trip() {
  let ctx = fixed_context();
  let content = staking_guide();
  let mut voted = FaqItem::new("How long is unbonding?", "About 21 days.");
  voted.upvote_count = Some(3);

  for schema in [
    technical_article_schema(&content, &ctx),
    webpage_schema(&content, &ctx),
    faq_schema(&[voted]),
  ] {
    let text = serde_json::to_string(&schema).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, schema);
    assert_eq!(parsed["@context"], "https://schema.org");
  }
}

#[test]
fn test_script_payload_parses_back_to_the_schema() {
  let schema = faq_schema(&[FaqItem::new("Is it </script> safe?", "Yes.")]);
  let page = PageSeo {
    structured_data: Some(schema.clone().into()),
    ..PageSeo::default()
  };
  let tags =
    build_page_head(&page, &Config::with_branding(branding())).unwrap();

  let body = tags
    .iter()
    .find_map(|tag| {
      match tag {
        HeadTag::Script { body, .. } => Some(body.clone()),
        _ => None,
      }
    })
    .expect("script tag");
  assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), schema);
}

#[test]
fn test_tag_maps_share_context() {
  let ctx = fixed_context();
  let content = staking_guide();

  let og = open_graph_tags(&content, &ctx);
  let ai = ai_meta_tags(&content, &ctx);
  assert_eq!(og["og:url"], "https://myapp.io/docs/staking");
  assert_eq!(ai["semantic:url"], og["og:url"]);
  assert_eq!(og["article:modified_time"], ai["ai:last-updated"]);
  assert!(ai["ai:audience"].contains("developers"));
  assert!(ai["ai:audience"].contains("crypto users"));

  let twitter = twitter_card_tags(&content);
  assert_eq!(twitter["twitter:data2"], "5 min");
  assert!(twitter.values().all(|v| !v.contains('\n')));
}

#[test]
fn test_faq_upvote_count() {
  let mut voted = FaqItem::new("Q?", "A.");
  voted.upvote_count = Some(7);
  let schema = faq_schema(&[FaqItem::new("Other?", "B."), voted]);
  assert_eq!(schema["mainEntity"][0].get("upvoteCount"), None);
  assert_eq!(schema["mainEntity"][1]["upvoteCount"], json!(7));
}
