//! ASCII-only operations: case conversion and fixed-width chunking.
//!
//! Everything in this module treats the input as a sequence of single-byte
//! characters. Case mapping is the C-locale ASCII mapping applied to each
//! byte independently; bytes outside `A-Z` / `a-z` (including anything
//! non-ASCII) pass through unchanged.

use alloc::vec::Vec;

/// Uppercases `s` in place, byte by byte.
///
/// Applies the C-locale ASCII mapping: `a-z` become `A-Z`, every other byte
/// is left as-is. Exclusive access to the buffer is the caller's concern and
/// is already enforced by the `&mut` borrow.
///
/// # Examples
///
/// ```
/// let mut buf = *b"sort -k2";
/// stringops::to_upper_inplace(&mut buf);
/// assert_eq!(&buf, b"SORT -K2");
/// ```
pub fn to_upper_inplace(s: &mut [u8]) {
    s.make_ascii_uppercase();
}

/// Lowercases `s` in place, byte by byte.
///
/// The counterpart of [`to_upper_inplace`]: `A-Z` become `a-z`, every other
/// byte is left as-is.
///
/// # Examples
///
/// ```
/// let mut buf = *b"Content-Length";
/// stringops::to_lower_inplace(&mut buf);
/// assert_eq!(&buf, b"content-length");
/// ```
pub fn to_lower_inplace(s: &mut [u8]) {
    s.make_ascii_lowercase();
}

/// Returns an uppercased copy of `s`.
///
/// The source is left untouched; the result has the same length as the
/// input and is allocated exactly once. Empty input yields an empty vector.
///
/// # Examples
///
/// ```
/// assert_eq!(stringops::as_upper(b"abc123"), b"ABC123");
/// assert_eq!(stringops::as_upper(b""), b"");
/// ```
#[must_use]
pub fn as_upper(s: &[u8]) -> Vec<u8> {
    s.to_ascii_uppercase()
}

/// Returns a lowercased copy of `s`.
///
/// The counterpart of [`as_upper`], with the same allocation behavior.
///
/// # Examples
///
/// ```
/// assert_eq!(stringops::as_lower(b"MixedCase"), b"mixedcase");
/// ```
#[must_use]
pub fn as_lower(s: &[u8]) -> Vec<u8> {
    s.to_ascii_lowercase()
}

/// Splits `s` into fixed-width chunks, dropping `skip` bytes between them.
///
/// Walks the input from offset zero. Each step takes up to `width` bytes as
/// one chunk (the final chunk may be shorter when fewer bytes remain), then
/// advances past the chunk and past `skip` further bytes, which are dropped
/// without being validated against the remaining length. Iteration stops
/// once the offset reaches or passes the end of `s`.
///
/// `width == 0` yields no chunks at all rather than an error. Pass
/// `skip == 0` for back-to-back chunks.
///
/// # Examples
///
/// ```
/// use stringops::chunk;
///
/// assert_eq!(chunk(b"abcdef123", 3, 0), [b"abc", b"def", b"123"]);
/// assert_eq!(chunk(b"abc,def,123", 3, 1), [b"abc", b"def", b"123"]);
/// assert_eq!(chunk(b"abcde", 2, 0), [&b"ab"[..], &b"cd"[..], &b"e"[..]]);
/// assert!(chunk(b"abc", 0, 5).is_empty());
/// ```
#[must_use]
pub fn chunk(s: &[u8], width: usize, skip: usize) -> Vec<&[u8]> {
    if width == 0 {
        return Vec::new();
    }

    let stride = width.saturating_add(skip);
    let mut chunks = Vec::with_capacity(s.len().div_ceil(stride));
    let mut start = 0;
    while start < s.len() {
        let end = usize::min(start.saturating_add(width), s.len());
        chunks.push(&s[start..end]);
        start = start.saturating_add(stride);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn upper_inplace_maps_letters_only() {
        let mut buf = *b"a1b2-Z z\xff";
        to_upper_inplace(&mut buf);
        assert_eq!(&buf, b"A1B2-Z Z\xff");
    }

    #[test]
    fn lower_inplace_maps_letters_only() {
        let mut buf = *b"A1B2-z Z\xff";
        to_lower_inplace(&mut buf);
        assert_eq!(&buf, b"a1b2-z z\xff");
    }

    #[test]
    fn copying_variants_leave_source_alone() {
        let src = b"MiXeD";
        assert_eq!(as_upper(src), b"MIXED");
        assert_eq!(as_lower(src), b"mixed");
        assert_eq!(src, b"MiXeD");
    }

    #[test]
    fn empty_input_round_trips() {
        assert_eq!(as_upper(b""), b"");
        assert_eq!(as_lower(b""), b"");
        let mut buf: [u8; 0] = [];
        to_upper_inplace(&mut buf);
    }

    #[test]
    fn case_mapping_exhaustive_over_all_bytes() {
        for b in 0u8..=255 {
            let up = as_upper(&[b])[0];
            let low = as_lower(&[b])[0];
            if b.is_ascii_lowercase() {
                assert_eq!(up, b - 32);
            } else {
                assert_eq!(up, b, "non-lowercase byte {b:#04x} must not change");
            }
            if b.is_ascii_uppercase() {
                assert_eq!(low, b + 32);
            } else {
                assert_eq!(low, b, "non-uppercase byte {b:#04x} must not change");
            }
            assert_eq!(as_upper(&as_lower(&[b]))[0], up);
            assert_eq!(as_lower(&as_upper(&[b]))[0], low);
        }
    }

    #[test]
    fn chunk_exact_multiple() {
        assert_eq!(chunk(b"abcdef123", 3, 0), [b"abc", b"def", b"123"]);
    }

    #[test]
    fn chunk_with_skip_drops_separators() {
        assert_eq!(chunk(b"abc,def,123", 3, 1), [b"abc", b"def", b"123"]);
    }

    #[test]
    fn chunk_short_tail() {
        assert_eq!(chunk(b"abcde", 2, 0), [&b"ab"[..], &b"cd"[..], &b"e"[..]]);
        assert_eq!(chunk(b"ab,cd,e", 2, 1), [&b"ab"[..], &b"cd"[..], &b"e"[..]]);
    }

    #[test]
    fn chunk_zero_width_is_empty() {
        assert!(chunk(b"abc", 0, 0).is_empty());
        assert!(chunk(b"", 0, 0).is_empty());
    }

    #[test]
    fn chunk_empty_input_is_empty() {
        assert!(chunk(b"", 3, 1).is_empty());
    }

    #[test]
    fn chunk_skip_past_end_terminates() {
        assert_eq!(chunk(b"abcd", 2, 100), [b"ab"]);
    }

    #[test]
    fn chunk_width_longer_than_input() {
        assert_eq!(chunk(b"ab", 10, 0), [b"ab"]);
    }

    #[test]
    fn chunk_pathological_sizes_do_not_overflow() {
        assert_eq!(chunk(b"abc", usize::MAX, usize::MAX), [b"abc"]);
        assert_eq!(chunk(b"abc", 1, usize::MAX), [b"a"]);
    }

    #[test]
    fn chunk_views_alias_the_source() {
        let src = b"xyz";
        let chunks: Vec<&[u8]> = chunk(src, 1, 0);
        assert_eq!(chunks[1].as_ptr(), src[1..].as_ptr());
    }
}
