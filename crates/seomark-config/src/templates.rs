use std::fmt;

/// Error type for template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// The requested configuration format is not supported.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Default configuration template in TOML, commented so that a fresh
/// `seomark init` explains every section.
pub const DEFAULT_TOML_TEMPLATE: &str = r##"# seomark configuration file

[branding]
# Application name, appended to page titles ("Page | My App")
app_name = "My App"

# Absolute base URL of the site, without a trailing slash
base_url = "https://example.org"

# Twitter handle used for twitter:site and twitter:creator
# twitter_handle = "@myapp"

# Domain used for the support address in the Organization schema
# email_domain = "example.org"

# Fallback description for pages that do not provide one
# default_description = "My App helps you do things."

# Fallback social image; defaults to "<base_url>/og-image.png"
# default_image = "https://example.org/social.png"

# Robots directive used when a page does not set one
default_robots = "index, follow"

# Open Graph type used when a page does not set one
default_og_type = "website"

# Twitter card type used when a page does not set one
default_twitter_card = "summary_large_image"

# Extra tags added to every page
# [meta.opengraph]
# "og:locale" = "en_US"
#
# [meta.tags]
# "theme-color" = "#0f172a"

# Heading class tables
# [headings]
# levels = [
#   "text-4xl font-bold tracking-tight",
#   "text-3xl font-semibold tracking-tight",
#   "text-2xl font-semibold",
#   "text-xl font-medium",
#   "text-lg font-medium",
#   "text-base font-medium",
# ]
#
# [headings.contexts]
# page-title = "mb-6 text-foreground"
# section = "mt-10 mb-4 text-foreground"
"##;

/// Default configuration template in JSON format.
pub const DEFAULT_JSON_TEMPLATE: &str = r##"{
  "branding": {
    "app_name": "My App",
    "base_url": "https://example.org",
    "twitter_handle": "@myapp",
    "email_domain": "example.org"
  },
  "default_description": "My App helps you do things.",
  "default_robots": "index, follow",
  "default_og_type": "website",
  "default_twitter_card": "summary_large_image",
  "meta": {
    "opengraph": {
      "og:locale": "en_US"
    },
    "tags": {
      "theme-color": "#0f172a"
    }
  }
}
"##;

/// Get the correct configuration template based on the requested format.
///
/// # Errors
///
/// Returns an error if the requested format is not supported.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
