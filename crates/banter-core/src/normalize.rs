//! Input normalization.
//!
//! Every line entering the dispatcher goes through [`normalize`] first; the
//! content store enforces the same form on its keys, so lookups are always
//! comparing like with like.

/// Trim surrounding whitespace and lower-case the line.
///
/// An empty result means the caller should skip the line entirely: no
/// history entry, no dispatch.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `s` is already in normalized form.
pub fn is_normalized(s: &str) -> bool {
    !s.is_empty() && s == normalize(s)
}
