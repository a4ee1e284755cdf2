//! # seomark - SEO and AI-oriented page metadata
//!
//! Generates the tags and structured data that search engines, social
//! previews and AI crawlers read: page titles and descriptions, Open Graph
//! and Twitter Card tags, `ai:`/`llm:`/`semantic:` tags, schema.org JSON-LD
//! objects, and semantic headings with a hierarchy validator.
//!
//! ## Quick Start
//!
//! ```rust
//! use seomark_config::{BrandingConfig, Config};
//! use seomark_core::{PageSeo, build_page_head, render_head_html};
//!
//! let config =
//!   Config::with_branding(BrandingConfig::new("MyApp", "https://myapp.io"));
//! let page = PageSeo {
//!   title: Some("Dashboard".to_string()),
//!   canonical_path: Some("/dashboard".to_string()),
//!   ..PageSeo::default()
//! };
//!
//! let tags = build_page_head(&page, &config).unwrap();
//! let html = render_head_html(&tags);
//! assert!(html.contains("<title>Dashboard | MyApp</title>"));
//! ```
//!
//! ## Headings
//!
//! ```rust
//! use seomark_core::{
//!   HeadingDescriptor,
//!   generate_heading,
//!   validate_heading_structure,
//! };
//!
//! let headings = [
//!   HeadingDescriptor::new(1, "Getting Started"),
//!   HeadingDescriptor::new(2, "Install"),
//! ];
//! assert!(validate_heading_structure(&headings).is_valid);
//!
//! let node = generate_heading(&headings[0]).unwrap();
//! assert_eq!(node.id, "getting-started");
//! ```
//!
//! ## Deterministic output
//!
//! Generators that need the current page path or time take a
//! [`RenderContext`]. Use [`RenderContext::new`] for reproducible output;
//! [`RenderContext::ambient`] reads the system clock.

pub mod ai;
pub mod context;
pub mod error;
pub mod head;
pub mod headings;
pub mod schema;
pub mod seo;
pub mod social;
pub mod utils;

pub use crate::{
  ai::{AiMeta, ai_meta_tags},
  context::RenderContext,
  error::{SeoError, SeoResult},
  head::{HeadTag, LinkTag, MetaTag, TagSet, render_head_html, tags_from_set},
  headings::{
    HeadingDescriptor,
    HeadingGenerator,
    HeadingNode,
    HeadingReport,
    SemanticContext,
    generate_heading,
    render_section,
    validate_heading_structure,
  },
  schema::{
    FaqItem,
    breadcrumb_schema,
    faq_schema,
    organization_schema,
    software_application_schema,
    technical_article_schema,
    webpage_schema,
  },
  seo::{PageSeo, StructuredDataInput, build_page_head},
  social::{open_graph_tags, twitter_card_tags},
};
