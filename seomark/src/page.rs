//! Page files: the per-page input the CLI renders metadata from.
use std::{fs, path::Path};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use seomark_config::{Config, ContentConfig};
use seomark_core::{
  AiMeta,
  FaqItem,
  HeadingDescriptor,
  PageSeo,
  seo::resolve_description,
};

use crate::error::{Result, SeomarkError};

/// Everything known about one page.
///
/// Branding is not part of a page file; it always comes from the site
/// config.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PageFile {
  pub seo: PageSeo,

  pub content: Option<ContentConfig>,

  pub faq: Vec<FaqItem>,

  pub ai: Option<AiMeta>,

  pub headings: Vec<HeadingDescriptor>,
}

/// A heading file is either a bare list (JSON only) or a page file.
#[derive(Deserialize)]
#[serde(untagged)]
enum HeadingsInput {
  List(Vec<HeadingDescriptor>),
  Page(PageFile),
}

impl PageFile {
  /// Load a page file (TOML or JSON, by extension).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format
  /// is unsupported.
  pub fn from_file(path: &Path) -> Result<Self> {
    parse_file(path)
  }

  /// Load a heading sequence from a page file or a JSON list.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format
  /// is unsupported.
  pub fn headings_from_file(path: &Path) -> Result<Vec<HeadingDescriptor>> {
    Ok(match parse_file::<HeadingsInput>(path)? {
      HeadingsInput::List(headings) => headings,
      HeadingsInput::Page(page) => page.headings,
    })
  }

  /// The content description for this page, with site branding applied.
  ///
  /// Pages without a `[content]` section get one derived from their SEO
  /// overrides.
  #[must_use]
  pub fn content(&self, config: &Config) -> ContentConfig {
    let mut content = self.content.clone().unwrap_or_else(|| {
      ContentConfig {
        title: self.seo.title.clone().unwrap_or_default(),
        keywords: self.seo.keywords.clone(),
        pathname: self.seo.canonical_path.clone(),
        ..ContentConfig::default()
      }
    });

    if content.description.is_empty() {
      content.description =
        resolve_description(&self.seo, config).unwrap_or_default();
    }
    content.branding = config.branding.clone();
    content
  }
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
  let text = fs::read_to_string(path)?;
  let ext = path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(str::to_lowercase);

  match ext.as_deref() {
    Some("json") => Ok(serde_json::from_str(&text)?),
    Some("toml") => Ok(toml::from_str(&text)?),
    _ => {
      Err(SeomarkError::Page(format!(
        "Unsupported page file format: {}",
        path.display()
      )))
    },
  }
}

#[cfg(test)]
mod tests {
  use seomark_config::BrandingConfig;

  use super::*;

  #[test]
  fn test_content_derived_from_seo() {
    let mut config =
      Config::with_branding(BrandingConfig::new("MyApp", "https://myapp.io"));
    config.default_description = Some("Site description".to_string());

    let page = PageFile {
      seo: PageSeo {
        title: Some("Pricing".to_string()),
        canonical_path: Some("/pricing".to_string()),
        ..PageSeo::default()
      },
      ..PageFile::default()
    };

    let content = page.content(&config);
    assert_eq!(content.title, "Pricing");
    assert_eq!(content.description, "Site description");
    assert_eq!(content.pathname.as_deref(), Some("/pricing"));
    assert_eq!(content.branding.app_name, "MyApp");
  }

  #[test]
  fn test_content_branding_always_from_site() {
    let config =
      Config::with_branding(BrandingConfig::new("MyApp", "https://myapp.io"));
    let page = PageFile {
      content: Some(ContentConfig {
        title: "Guide".to_string(),
        description: "A guide".to_string(),
        branding: BrandingConfig::new("Other", "https://other.io"),
        ..ContentConfig::default()
      }),
      ..PageFile::default()
    };

    let content = page.content(&config);
    assert_eq!(content.branding.base_url, "https://myapp.io");
    assert_eq!(content.description, "A guide");
  }
}
