//! URL slug validation for blog posts.
//!
//! A slug is a non-empty run of lowercase ASCII letters, digits and single
//! hyphens, never starting or ending with a hyphen.

/// Return `true` when `value` can be used as a blog URL segment.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
