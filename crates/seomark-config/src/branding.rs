use serde::{Deserialize, Serialize};

/// Domain used for generated contact addresses when none is configured.
pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// Site branding shared by every generated tag and schema.
///
/// Only `app_name` and `base_url` are required. The optional fields are never
/// rewritten in place; use the accessor methods to get their resolved values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BrandingConfig {
  /// Application name, used as the title suffix and publisher name.
  pub app_name: String,

  /// Absolute base URL of the site (e.g. `https://example.org`).
  pub base_url: String,

  /// Twitter handle, including the leading `@`.
  pub twitter_handle: Option<String>,

  /// Domain used for contact addresses (e.g. `support@<domain>`).
  pub email_domain: Option<String>,
}

impl BrandingConfig {
  /// Create branding with only the required fields set.
  #[must_use]
  pub fn new(app_name: impl Into<String>, base_url: impl Into<String>) -> Self {
    Self {
      app_name:       app_name.into(),
      base_url:       base_url.into(),
      twitter_handle: None,
      email_domain:   None,
    }
  }

  /// Twitter handle, or an empty string when unset.
  #[must_use]
  pub fn twitter_handle(&self) -> &str {
    self.twitter_handle.as_deref().unwrap_or_default()
  }

  /// Email domain, or [`DEFAULT_EMAIL_DOMAIN`] when unset.
  #[must_use]
  pub fn email_domain(&self) -> &str {
    self.email_domain.as_deref().unwrap_or(DEFAULT_EMAIL_DOMAIN)
  }

  /// Join the base URL and a path without any normalization.
  #[must_use]
  pub fn url_for(&self, path: &str) -> String {
    format!("{}{path}", self.base_url)
  }
}
