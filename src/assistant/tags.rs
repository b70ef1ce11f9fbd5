//! Tag normalization for notes.
//!
//! Tags are free-form but compared in one canonical spelling: surrounding
//! whitespace and a leading `#` are dropped, and the rest is lower-cased.
//! So `#Home`, `home` and ` HOME ` are all the tag `home`.

use crate::error::{AssistantError, Result};

/// Returns the canonical spelling of `tag`.
///
/// # Examples
/// ```
/// use assistant::tags::normalize_tag;
///
/// assert_eq!(normalize_tag("#Home").unwrap(), "home");
/// assert_eq!(normalize_tag("work").unwrap(), "work");
/// assert!(normalize_tag("#").is_err());
/// ```
pub fn normalize_tag(tag: &str) -> Result<String> {
    let normalized = tag.trim().trim_start_matches('#').trim().to_lowercase();
    if normalized.is_empty() {
        return Err(AssistantError::Validation(format!(
            "Invalid tag '{}': tag cannot be empty",
            tag
        )));
    }
    Ok(normalized)
}

/// True if `token` is written as a tag (`#something`) on the command line.
pub fn is_tag_token(token: &str) -> bool {
    token.len() > 1 && token.starts_with('#')
}
