//! Configuration types for seomark.
//!
//! The site-level [`Config`] is loaded once from TOML or JSON and carries the
//! branding and fallback defaults. Per-page input is described by
//! [`ContentConfig`].
pub mod branding;
pub mod config;
pub mod content;
pub mod error;
pub mod headings;
pub mod meta;
pub mod templates;

pub use branding::BrandingConfig;
pub use config::Config;
pub use content::{Complexity, ContentConfig, ContentType, StringOrList};
pub use error::ConfigError;
pub use headings::HeadingsConfig;
pub use meta::MetaConfig;
