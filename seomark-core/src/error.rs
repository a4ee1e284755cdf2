use thiserror::Error;

/// Error type for metadata and heading generation.
///
/// Missing optional data is never an error; these variants only cover
/// precondition violations and serialization failures.
#[derive(Debug, Error)]
pub enum SeoError {
  #[error("Invalid heading level {0}: levels must be between 1 and 6")]
  InvalidHeadingLevel(u8),

  #[error("Failed to serialize structured data: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Result type for seomark-core operations.
pub type SeoResult<T> = Result<T, SeoError>;
