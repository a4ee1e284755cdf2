//! String helpers shared by the heading and metadata generators.

/// Slugify a string for use as an element ID.
///
/// Converts to lowercase, replaces every run of characters outside
/// `[a-z0-9]` with a single dash, and trims leading/trailing dashes.
///
/// ```
/// use seomark_core::utils::slugify;
///
/// assert_eq!(
///   slugify("Test & Heading! With @Special# Chars"),
///   "test-heading-with-special-chars"
/// );
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
  let mut slug = String::with_capacity(text.len());
  let mut pending_dash = false;

  for c in text.to_lowercase().chars() {
    if c.is_ascii_lowercase() || c.is_ascii_digit() {
      if pending_dash && !slug.is_empty() {
        slug.push('-');
      }
      pending_dash = false;
      slug.push(c);
    } else {
      pending_dash = true;
    }
  }

  slug
}

/// Return the first `max_chars` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
  text
    .char_indices()
    .nth(max_chars)
    .map_or(text, |(idx, _)| &text[..idx])
}

/// Join a list of values with `separator`, skipping empty entries.
#[must_use]
pub fn join_non_empty<S: AsRef<str>>(items: &[S], separator: &str) -> String {
  items
    .iter()
    .map(AsRef::as_ref)
    .filter(|item| !item.is_empty())
    .collect::<Vec<_>>()
    .join(separator)
}
