//! Explicit carrier for the ambient values metadata generation depends on.
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Path used when no page location is available, e.g. during server-side
/// rendering.
pub const DEFAULT_PATH: &str = "/";

/// The current page path and the current time.
///
/// Generators never read the clock or the page location themselves. Build a
/// context with [`RenderContext::new`] for reproducible output, or with
/// [`RenderContext::ambient`] at the call site that owns the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
  /// Path of the page being rendered, used when a config has no override.
  pub current_path: String,

  /// Time used for `dateModified` and similar fields when a config has no
  /// `last_updated` value.
  pub now: Timestamp,
}

impl RenderContext {
  /// Create a fully deterministic context.
  #[must_use]
  pub fn new(current_path: impl Into<String>, now: Timestamp) -> Self {
    Self {
      current_path: current_path.into(),
      now,
    }
  }

  /// Create a context from the environment.
  ///
  /// Reads the system clock. A missing or blank `location` falls back to
  /// [`DEFAULT_PATH`].
  #[must_use]
  pub fn ambient(location: Option<&str>) -> Self {
    let current_path = location
      .map(str::trim)
      .filter(|path| !path.is_empty())
      .unwrap_or_else(|| {
        log::debug!("No page location available, using '{DEFAULT_PATH}'");
        DEFAULT_PATH
      });

    Self::new(current_path, Timestamp::now())
  }

  /// Resolve the page path, preferring an explicit override.
  #[must_use]
  pub fn path<'a>(&'a self, path_override: Option<&'a str>) -> &'a str {
    path_override.unwrap_or(&self.current_path)
  }

  /// Resolve a timestamp, preferring an explicit value over the context's
  /// clock.
  #[must_use]
  pub fn timestamp(&self, explicit: Option<Timestamp>) -> Timestamp {
    explicit.unwrap_or(self.now)
  }
}

impl Default for RenderContext {
  fn default() -> Self {
    Self::new(DEFAULT_PATH, Timestamp::UNIX_EPOCH)
  }
}
