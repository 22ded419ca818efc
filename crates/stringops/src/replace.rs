//! Substring replacement.

use alloc::vec::Vec;

use bstr::ByteSlice;

/// Replaces every non-overlapping occurrence of `search` in `s` with
/// `replacement`, returning a new owned sequence.
///
/// The scan is the same left-to-right, non-overlapping walk as [`split`]:
/// after a match the search resumes past it, so the replacement text itself
/// is never rescanned. When `search` does not occur the result is a plain
/// copy of `s`. An empty `search` is a no-op returning a copy of `s` (see
/// the crate docs on degenerate inputs).
///
/// The output length is exactly
/// `s.len() - n * search.len() + n * replacement.len()` for `n` occurrences,
/// and the result is allocated once at that size rather than grown
/// incrementally.
///
/// # Examples
///
/// ```
/// use stringops::replace;
///
/// assert_eq!(replace(b"aXbXc", b"X", b"--"), b"a--b--c");
/// assert_eq!(replace(b"abc", b"Z", b"Q"), b"abc");
/// assert_eq!(replace(b"aaa", b"aa", b"b"), b"ba");
/// ```
///
/// [`split`]: crate::split()
#[must_use]
pub fn replace(s: &[u8], search: &[u8], replacement: &[u8]) -> Vec<u8> {
    if search.is_empty() {
        return s.to_vec();
    }

    let positions: Vec<usize> = s.find_iter(search).collect();
    if positions.is_empty() {
        return s.to_vec();
    }

    // The matches are disjoint ranges inside `s`, so the subtraction cannot
    // underflow.
    let n = positions.len();
    let out_len = s.len() - n * search.len() + n * replacement.len();

    let mut out = Vec::with_capacity(out_len);
    let mut tail = 0;
    for &at in &positions {
        out.extend_from_slice(&s[tail..at]);
        out.extend_from_slice(replacement);
        tail = at + search.len();
    }
    out.extend_from_slice(&s[tail..]);
    debug_assert_eq!(out.len(), out_len);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(replace(b"aXbXc", b"X", b"--"), b"a--b--c");
        assert_eq!(replace(b"XX", b"X", b"y"), b"yy");
    }

    #[test]
    fn absent_search_returns_copy() {
        assert_eq!(replace(b"abc", b"Z", b"Q"), b"abc");
        assert_eq!(replace(b"", b"Z", b"Q"), b"");
    }

    #[test]
    fn empty_search_is_a_no_op() {
        assert_eq!(replace(b"abc", b"", b"anything"), b"abc");
        assert_eq!(replace(b"", b"", b"anything"), b"");
    }

    #[test]
    fn shrinking_replacement() {
        assert_eq!(replace(b"a--b--c", b"--", b"."), b"a.b.c");
        assert_eq!(replace(b"a--b", b"--", b""), b"ab");
    }

    #[test]
    fn growing_replacement_at_edges() {
        assert_eq!(replace(b"Xa", b"X", b"<<>>"), b"<<>>a");
        assert_eq!(replace(b"aX", b"X", b"<<>>"), b"a<<>>");
        assert_eq!(replace(b"X", b"X", b"<<>>"), b"<<>>");
    }

    #[test]
    fn scan_does_not_revisit_replacement_text() {
        // Replacing "a" with "aa" must not cascade.
        assert_eq!(replace(b"aaa", b"a", b"aa"), b"aaaaaa");
    }

    #[test]
    fn non_overlapping_matches_only() {
        assert_eq!(replace(b"aaa", b"aa", b"b"), b"ba");
        assert_eq!(replace(b"aaaa", b"aa", b"b"), b"bb");
    }

    #[test]
    fn whole_input_replaced() {
        assert_eq!(replace(b"abab", b"ab", b""), b"");
    }

    #[test]
    fn search_longer_than_input() {
        assert_eq!(replace(b"ab", b"abc", b"x"), b"ab");
    }

    #[test]
    fn adjacent_matches() {
        assert_eq!(replace(b",,", b",", b"; "), b"; ; ");
    }
}
