//! Degrade-to-default policy.
//!
//! Rendering feeds the document head, so a bad field must never abort the
//! page. Every fallback in the builder goes through these helpers instead
//! of ad hoc checks.

/// A present value, or `None` if it is missing or blank.
#[inline]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// First non-blank of `value` and `default`.
#[inline]
pub fn resolve_or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    non_empty(value).unwrap_or(default)
}
