//! Prefix and suffix testing over byte slices.
//!
//! Both predicates compare bytewise and short-circuit on the first
//! mismatch. An empty needle (or an empty haystack) never matches; this is
//! a deliberate departure from the usual convention that the empty string
//! is a prefix of everything, and from `<[u8]>::starts_with`. Callers that
//! want the conventional rule should use the slice methods directly.

/// Returns `true` when `s` begins with the non-empty byte sequence
/// `prefix`.
///
/// `false` whenever `s` is empty, `prefix` is empty, or `prefix` is longer
/// than `s`. Note that `starts_with(b"abc", b"")` is `false` here even
/// though an empty prefix trivially matches mathematically.
///
/// # Examples
///
/// ```
/// use stringops::starts_with;
///
/// assert!(starts_with(b"abc", b"abc"));
/// assert!(starts_with(b"abcdef", b"abc"));
/// assert!(!starts_with(b"ab", b"abc"));
/// assert!(!starts_with(b"abc", b""));
/// assert!(!starts_with(b"", b""));
/// ```
#[must_use]
pub fn starts_with(s: &[u8], prefix: &[u8]) -> bool {
    if s.is_empty() || prefix.is_empty() || prefix.len() > s.len() {
        return false;
    }
    s.starts_with(prefix)
}

/// Returns `true` when `s` ends with the non-empty byte sequence `suffix`.
///
/// Symmetric to [`starts_with`], including the empty-input policy: an empty
/// `s` or an empty `suffix` yields `false`.
///
/// # Examples
///
/// ```
/// use stringops::ends_with;
///
/// assert!(ends_with(b"archive.tar", b".tar"));
/// assert!(!ends_with(b"archive.tar", b".zip"));
/// assert!(!ends_with(b"archive.tar", b""));
/// ```
#[must_use]
pub fn ends_with(s: &[u8], suffix: &[u8]) -> bool {
    if s.is_empty() || suffix.is_empty() || suffix.len() > s.len() {
        return false;
    }
    s.ends_with(suffix)
}
