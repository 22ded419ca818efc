//! Splitting byte sequences on a delimiter token.
//!
//! The scan walks the haystack left to right over the non-overlapping
//! occurrences of the token (the search resumes after each match, never
//! inside one) and emits the gaps between consecutive match boundaries.
//! One generic implementation serves both the borrowing and the copying
//! variants; the [`Fragment`] bound decides how a gap is materialized.

use alloc::{vec, vec::Vec};

use bstr::ByteSlice;

/// How a gap between two token occurrences becomes an output fragment.
///
/// Implemented for `&[u8]` (borrow the gap out of the haystack) and
/// `Vec<u8>` (copy it), so the scan in [`split_with`] exists exactly once.
trait Fragment<'h>: Sized {
    fn from_slice(slice: &'h [u8]) -> Self;
}

impl<'h> Fragment<'h> for &'h [u8] {
    fn from_slice(slice: &'h [u8]) -> Self {
        slice
    }
}

impl<'h> Fragment<'h> for Vec<u8> {
    fn from_slice(slice: &'h [u8]) -> Self {
        slice.to_vec()
    }
}

/// The scan shared by [`split`] and [`split_copy`].
fn split_with<'h, F: Fragment<'h>>(s: &'h [u8], token: &[u8], keep_empty: bool) -> Vec<F> {
    if token.is_empty() {
        // An empty token is treated as never occurring; see the crate docs
        // on degenerate inputs.
        return if keep_empty || !s.is_empty() {
            vec![F::from_slice(s)]
        } else {
            Vec::new()
        };
    }

    let mut parts = Vec::new();
    let mut start = 0;
    for at in s.find_iter(token) {
        if keep_empty || at > start {
            parts.push(F::from_slice(&s[start..at]));
        }
        start = at + token.len();
    }
    if keep_empty || start < s.len() {
        parts.push(F::from_slice(&s[start..]));
    }
    parts
}

/// Splits `s` on every occurrence of `token`, returning borrowed fragments.
///
/// Fragments are the gaps between consecutive token occurrences, in source
/// order. With `keep_empty` set, every gap is emitted: adjacent tokens
/// produce an empty fragment between them, a leading token produces a
/// leading empty fragment, and a trailing token produces a trailing one, so
/// an input equal to `token` yields two empty fragments and joining the
/// result back with `token` always reproduces `s`. With `keep_empty`
/// cleared, zero-length gaps are dropped; an input consisting only of
/// separators yields nothing.
///
/// An input without any occurrence yields the whole input as the single
/// fragment. An empty `token` never matches (see the crate docs on
/// degenerate inputs).
///
/// # Examples
///
/// ```
/// use stringops::split;
///
/// assert_eq!(split(b"a,,b", b",", true), [&b"a"[..], &b""[..], &b"b"[..]]);
/// assert_eq!(split(b"a,,b", b",", false), [b"a", b"b"]);
/// assert_eq!(split(b"no-comma", b",", true), [b"no-comma"]);
/// assert_eq!(split(b",", b",", true), [b"", b""]);
/// assert!(split(b",,,", b",", false).is_empty());
/// ```
#[must_use]
pub fn split<'h>(s: &'h [u8], token: &[u8], keep_empty: bool) -> Vec<&'h [u8]> {
    split_with(s, token, keep_empty)
}

/// Splits `s` on every occurrence of `token`, returning owned fragments.
///
/// Identical to [`split`] in every respect except that each fragment is
/// copied into its own `Vec<u8>`, so the result does not borrow from `s`.
///
/// # Examples
///
/// ```
/// use stringops::split_copy;
///
/// let parts = split_copy(b"a:b", b":", true);
/// assert_eq!(parts, [b"a", b"b"]);
/// ```
#[must_use]
pub fn split_copy(s: &[u8], token: &[u8], keep_empty: bool) -> Vec<Vec<u8>> {
    split_with(s, token, keep_empty)
}

/// Splits `s` at the first occurrence of `token` into head and tail.
///
/// The token itself belongs to neither part. When `token` does not occur,
/// the head is the whole input and the tail is empty. An empty `token`
/// matches at offset zero (the substring-search convention), giving an
/// empty head and the whole input as tail.
///
/// # Examples
///
/// ```
/// use stringops::split_first;
///
/// assert_eq!(split_first(b"key=value=more", b"="), (&b"key"[..], &b"value=more"[..]));
/// assert_eq!(split_first(b"noequals", b"="), (&b"noequals"[..], &b""[..]));
/// ```
#[must_use]
pub fn split_first<'h>(s: &'h [u8], token: &[u8]) -> (&'h [u8], &'h [u8]) {
    match s.find(token) {
        Some(at) => (&s[..at], &s[at + token.len()..]),
        None => (s, &[]),
    }
}

/// Splits `s` at the first occurrence of `token` into owned head and tail.
///
/// The copying counterpart of [`split_first`].
///
/// # Examples
///
/// ```
/// use stringops::split_first_copy;
///
/// let (head, tail) = split_first_copy(b"a=b", b"=");
/// assert_eq!((head, tail), (b"a".to_vec(), b"b".to_vec()));
/// ```
#[must_use]
pub fn split_first_copy(s: &[u8], token: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let (head, tail) = split_first(s, token);
    (head.to_vec(), tail.to_vec())
}
