use std::io;

use seomark_config::ConfigError;
use seomark_core::SeoError;
use thiserror::Error;

/// Top-level error type for the seomark crate.
#[derive(Debug, Error)]
pub enum SeomarkError {
  #[error("Page file error: {0}")]
  Page(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Seo(#[from] SeoError),
}

pub type Result<T> = std::result::Result<T, SeomarkError>;
