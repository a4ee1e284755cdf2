use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
  branding::BrandingConfig,
  error::ConfigError,
  headings::HeadingsConfig,
  meta::MetaConfig,
};

/// Robots directive used when neither the page nor the config sets one.
pub const DEFAULT_ROBOTS: &str = "index, follow";

/// Open Graph type used when neither the page nor the config sets one.
pub const DEFAULT_OG_TYPE: &str = "website";

/// Twitter card type used when neither the page nor the config sets one.
pub const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// Site-level configuration for seomark.
///
/// [`Config`] holds the branding shared by every page plus the defaults used
/// by the fallback chains when a page omits a value. Fields are typically
/// loaded from a TOML or JSON config file and adjusted with `KEY=VALUE`
/// overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
  /// Site branding.
  pub branding: BrandingConfig,

  /// Description used when a page provides none.
  pub default_description: Option<String>,

  /// Social image used when a page provides none.
  pub default_image: Option<String>,

  /// Robots directive used when a page provides none.
  pub default_robots: String,

  /// Open Graph type used when a page provides none.
  pub default_og_type: String,

  /// Twitter card type used when a page provides none.
  pub default_twitter_card: String,

  /// Site-wide passthrough meta tags.
  pub meta: Option<MetaConfig>,

  /// Heading class tables.
  pub headings: HeadingsConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      branding:             BrandingConfig::default(),
      default_description:  None,
      default_image:        None,
      default_robots:       DEFAULT_ROBOTS.to_string(),
      default_og_type:      DEFAULT_OG_TYPE.to_string(),
      default_twitter_card: DEFAULT_TWITTER_CARD.to_string(),
      meta:                 None,
      headings:             HeadingsConfig::default(),
    }
  }
}

impl Config {
  /// Create a configuration with the given branding and default settings.
  #[must_use]
  pub fn with_branding(branding: BrandingConfig) -> Self {
    Self {
      branding,
      ..Self::default()
    }
  }

  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      )));
    };

    match ext.to_lowercase().as_str() {
      "json" => {
        serde_json::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      "toml" => {
        toml::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from files and overrides, merging them.
  ///
  /// Explicit files are merged in order, later files overriding earlier
  /// ones. Without explicit files a config file is discovered in the current
  /// directory. Overrides are applied last and the result is validated.
  ///
  /// # Errors
  ///
  /// Returns an error if a file fails to load, an override is malformed, or
  /// the resulting configuration is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load config from {}: {}",
          first.display(),
          e
        ))
      })?;

      for config_path in rest {
        let additional_config = Self::from_file(config_path).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to load config from {}: {}",
            config_path.display(),
            e
          ))
        })?;
        merged_config.merge(additional_config);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged_config
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load discovered config from {}: {}",
          discovered_config.display(),
          e
        ))
      })?
    } else {
      log::debug!("No config file found, using defaults");
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Look for a config file in the current directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    const CONFIG_FILENAMES: [&str; 4] = [
      "seomark.toml",
      "seomark.json",
      ".seomark.toml",
      ".seomark.json",
    ];

    let current_dir = std::env::current_dir().ok()?;
    CONFIG_FILENAMES
      .iter()
      .map(|filename| current_dir.join(filename))
      .find(|path| path.exists())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - Meta maps: Other's entries are merged in (can override individual
  ///   keys)
  /// - Plain fields: Other's value replaces this one unless it is empty or
  ///   still the built-in default
  pub fn merge(&mut self, other: Self) {
    let defaults = Self::default();

    merge_string(&mut self.branding.app_name, other.branding.app_name, "");
    merge_string(&mut self.branding.base_url, other.branding.base_url, "");
    if other.branding.twitter_handle.is_some() {
      self.branding.twitter_handle = other.branding.twitter_handle;
    }
    if other.branding.email_domain.is_some() {
      self.branding.email_domain = other.branding.email_domain;
    }

    if other.default_description.is_some() {
      self.default_description = other.default_description;
    }
    if other.default_image.is_some() {
      self.default_image = other.default_image;
    }
    merge_string(
      &mut self.default_robots,
      other.default_robots,
      &defaults.default_robots,
    );
    merge_string(
      &mut self.default_og_type,
      other.default_og_type,
      &defaults.default_og_type,
    );
    merge_string(
      &mut self.default_twitter_card,
      other.default_twitter_card,
      &defaults.default_twitter_card,
    );

    if let Some(other_meta) = other.meta {
      match self.meta {
        Some(ref mut meta) => meta.merge(other_meta),
        None => self.meta = Some(other_meta),
      }
    }

    if other.headings != defaults.headings {
      self.headings = other.headings;
    }
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if an override is not in KEY=VALUE format or names an
  /// unknown key.
  ///
  /// # Example
  ///
  /// ```rust, ignore
  /// config.apply_overrides(&vec![
  ///     "branding.app_name=My App".to_string(),
  ///     "default_robots=noindex".to_string(),
  /// ])?;
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override. An empty value clears optional fields.
  ///
  /// # Errors
  ///
  /// Returns an error if the key is not recognized.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    let optional = || (!value.is_empty()).then(|| value.to_string());

    match key {
      "app_name" | "branding.app_name" => {
        self.branding.app_name = value.to_string();
      },
      "base_url" | "branding.base_url" => {
        self.branding.base_url = value.to_string();
      },
      "twitter_handle" | "branding.twitter_handle" => {
        self.branding.twitter_handle = optional();
      },
      "email_domain" | "branding.email_domain" => {
        self.branding.email_domain = optional();
      },
      "default_description" => self.default_description = optional(),
      "default_image" => self.default_image = optional(),
      "default_robots" => self.default_robots = value.to_string(),
      "default_og_type" => self.default_og_type = value.to_string(),
      "default_twitter_card" => self.default_twitter_card = value.to_string(),
      _ => {
        if let Some(tag) = key.strip_prefix("meta.tags.") {
          self
            .meta
            .get_or_insert_with(MetaConfig::default)
            .tags
            .get_or_insert_with(Default::default)
            .insert(tag.to_string(), value.to_string());
        } else if let Some(tag) = key.strip_prefix("meta.opengraph.") {
          self
            .meta
            .get_or_insert_with(MetaConfig::default)
            .opengraph
            .get_or_insert_with(Default::default)
            .insert(tag.to_string(), value.to_string());
        } else {
          return Err(ConfigError::Config(format!(
            "Unknown configuration key: '{key}'"
          )));
        }
      },
    }

    log::debug!("Applied config override: {key}={value}");
    Ok(())
  }

  /// Validate the configuration.
  ///
  /// All problems are collected and reported together.
  ///
  /// # Errors
  ///
  /// Returns an error if `branding.app_name` is empty, `branding.base_url` is
  /// not an absolute http(s) URL, or the heading level table does not have
  /// exactly six entries.
  pub fn validate(&self) -> Result<(), ConfigError> {
    static ABSOLUTE_URL: OnceLock<Result<Regex, regex::Error>> =
      OnceLock::new();

    let mut errors = Vec::new();

    if self.branding.app_name.trim().is_empty() {
      errors.push("branding.app_name must not be empty".to_string());
    }

    let url_re = ABSOLUTE_URL
      .get_or_init(|| Regex::new(r"^https?://[^/\s]+(/\S*)?$"))
      .as_ref()
      .map_err(|e| ConfigError::Regex(e.clone()))?;

    if !url_re.is_match(&self.branding.base_url) {
      errors.push(format!(
        "branding.base_url must be an absolute http(s) URL, got '{}'",
        self.branding.base_url
      ));
    } else if self.branding.base_url.ends_with('/') {
      log::warn!(
        "branding.base_url ends with '/'; canonical URLs are joined without \
         normalization and may contain '//'"
      );
    }

    if self.headings.levels.len() != 6 {
      errors.push(format!(
        "headings.levels must list exactly 6 classes, got {}",
        self.headings.levels.len()
      ));
    }

    if !errors.is_empty() {
      let error_message = errors.join("\n");
      return Err(ConfigError::Config(format!(
        "Configuration validation errors:\n{error_message}"
      )));
    }

    Ok(())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

fn merge_string(base: &mut String, other: String, default: &str) {
  if !other.is_empty() && other != default {
    *base = other;
  }
}

#[cfg(test)]
mod tests {
  #![allow(
    clippy::unwrap_used,
    clippy::field_reassign_with_default,
    reason = "Fine in tests"
  )]

  use super::*;

  fn valid_config() -> Config {
    Config::with_branding(BrandingConfig::new("MyApp", "https://myapp.io"))
  }

  #[test]
  fn test_validate_accepts_minimal_branding() {
    assert!(valid_config().validate().is_ok());
  }

  #[test]
  fn test_validate_collects_all_errors() {
    let mut config = Config::default();
    config.branding.base_url = "myapp.io".to_string();
    config.headings.levels.pop();

    let err = config.validate().unwrap_err().to_string();
    assert!(err.contains("app_name"));
    assert!(err.contains("base_url"));
    assert!(err.contains("exactly 6"));
  }

  #[test]
  fn test_merge_option_fields() {
    let mut base = valid_config();
    base.default_description = Some("base".to_string());
    base.branding.twitter_handle = Some("@base".to_string());

    let mut other = Config::default();
    other.default_image = Some("https://cdn.myapp.io/og.png".to_string());

    base.merge(other);

    // None in the override keeps the base value
    assert_eq!(base.default_description.as_deref(), Some("base"));
    assert_eq!(base.branding.twitter_handle.as_deref(), Some("@base"));
    assert_eq!(
      base.default_image.as_deref(),
      Some("https://cdn.myapp.io/og.png")
    );
    assert_eq!(base.branding.app_name, "MyApp");
  }

  #[test]
  fn test_merge_meta_maps_extend() {
    let mut base = valid_config();
    base
      .apply_overrides(&[
        "meta.tags.author=Base".to_string(),
        "meta.tags.theme-color=#fff".to_string(),
      ])
      .unwrap();

    let mut other = Config::default();
    other
      .apply_override("meta.tags.author", "Override")
      .unwrap();

    base.merge(other);

    let tags = base.meta.unwrap().tags.unwrap();
    assert_eq!(tags.get("author").map(String::as_str), Some("Override"));
    assert_eq!(tags.get("theme-color").map(String::as_str), Some("#fff"));
  }

  #[test]
  fn test_apply_overrides() {
    let mut config = valid_config();
    config
      .apply_overrides(&[
        "branding.app_name=Other App".to_string(),
        "twitter_handle=@other".to_string(),
        "default_robots=noindex, nofollow".to_string(),
      ])
      .unwrap();

    assert_eq!(config.branding.app_name, "Other App");
    assert_eq!(config.branding.twitter_handle(), "@other");
    assert_eq!(config.default_robots, "noindex, nofollow");

    config.apply_override("twitter_handle", "").unwrap();
    assert!(config.branding.twitter_handle.is_none());
  }

  #[test]
  fn test_apply_overrides_rejects_bad_input() {
    let mut config = valid_config();
    assert!(config.apply_overrides(&["no_equals".to_string()]).is_err());
    assert!(config.apply_override("nonexistent", "x").is_err());
  }
}
