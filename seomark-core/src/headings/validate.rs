use std::collections::HashMap;

use super::{HeadingDescriptor, HeadingReport};
use crate::utils::truncate_chars;

/// Headings shorter than this many characters are reported as errors.
pub const MIN_HEADING_LENGTH: usize = 3;

/// Headings longer than this many characters get a suggestion.
pub const MAX_HEADING_LENGTH: usize = 70;

const PREVIEW_LENGTH: usize = 30;

/// Check a document-ordered heading sequence for structural problems.
///
/// Every rule runs over the whole sequence and all findings are collected:
///
/// - exactly one level-1 heading
/// - no level may be skipped going down (`h2` → `h4`); going back up by any
///   amount is fine
/// - levels must be within 1-6
/// - text must be at least [`MIN_HEADING_LENGTH`] characters
/// - resolved IDs must be unique
/// - text longer than [`MAX_HEADING_LENGTH`] characters produces a suggestion
#[must_use]
pub fn validate_heading_structure(
  headings: &[HeadingDescriptor],
) -> HeadingReport {
  let mut errors = Vec::new();
  let mut suggestions = Vec::new();

  let h1_count = headings.iter().filter(|h| h.level == 1).count();
  match h1_count {
    0 => {
      errors.push(
        "Missing top-level heading (H1). Every page should have exactly one \
         H1."
          .to_string(),
      );
    },
    1 => {},
    n => {
      errors.push(format!(
        "Found {n} H1 headings. Only one H1 is allowed per page."
      ));
    },
  }

  for pair in headings.windows(2) {
    let (previous, current) = (pair[0].level, pair[1].level);
    if u16::from(current) > u16::from(previous) + 1 {
      errors.push(format!(
        "Heading level skipped: H{previous} is followed by H{current}. Do \
         not jump from H{previous} to H{current}."
      ));
    }
  }

  for (index, heading) in headings.iter().enumerate() {
    let position = index + 1;

    if !(1..=6).contains(&heading.level) {
      errors.push(format!(
        "Heading {position} has invalid level {}. Levels must be between 1 \
         and 6.",
        heading.level
      ));
    }

    let length = heading.text.chars().count();
    if length < MIN_HEADING_LENGTH {
      errors.push(format!(
        "Heading {position} is too short (\"{}\"). Headings should be at \
         least {MIN_HEADING_LENGTH} characters.",
        heading.text
      ));
    }

    if length > MAX_HEADING_LENGTH {
      suggestions.push(format!(
        "Heading \"{}...\" is {length} characters long. Consider shortening \
         it to {MAX_HEADING_LENGTH} characters or fewer.",
        truncate_chars(&heading.text, PREVIEW_LENGTH)
      ));
    }
  }

  let mut seen: HashMap<String, usize> = HashMap::new();
  for (index, heading) in headings.iter().enumerate() {
    let id = heading.resolved_id();
    if id.is_empty() {
      continue;
    }
    if let Some(first) = seen.get(&id) {
      errors.push(format!(
        "Heading {} reuses the ID \"{id}\" of heading {first}. IDs must be \
         unique.",
        index + 1
      ));
    } else {
      seen.insert(id, index + 1);
    }
  }

  log::trace!(
    "Validated {} headings: {} errors, {} suggestions",
    headings.len(),
    errors.len(),
    suggestions.len()
  );

  HeadingReport {
    is_valid: errors.is_empty(),
    errors,
    suggestions,
  }
}
