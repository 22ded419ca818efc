#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringops::{
    as_lower, as_upper, chunk, ends_with, replace, split, split_copy, split_first,
    split_first_copy, starts_with, to_lower_inplace, to_upper_inplace,
};

#[derive(Arbitrary, Debug)]
struct Ops<'a> {
    haystack: &'a [u8],
    token: &'a [u8],
    replacement: &'a [u8],
    width: u8,
    skip: u8,
    keep_empty: bool,
}

fn run(ops: &Ops<'_>) {
    let Ops {
        haystack,
        token,
        replacement,
        width,
        skip,
        keep_empty,
    } = *ops;

    // Case mapping preserves length, and the in-place variants agree with the
    // copying ones.
    let upper = as_upper(haystack);
    let lower = as_lower(haystack);
    assert_eq!(upper.len(), haystack.len());
    assert_eq!(lower.len(), haystack.len());

    let mut buf = haystack.to_vec();
    to_upper_inplace(&mut buf);
    assert_eq!(buf, upper);
    to_lower_inplace(&mut buf);
    assert_eq!(buf, lower);

    // Affix tests agree with plain slice matching except for the empty-input
    // rule.
    assert_eq!(
        starts_with(haystack, token),
        !token.is_empty() && haystack.starts_with(token)
    );
    assert_eq!(
        ends_with(haystack, token),
        !token.is_empty() && haystack.ends_with(token)
    );

    // Splitting: parts never out-grow the input, discard mode never emits an
    // empty part, and the copying variant mirrors the borrowing one.
    let parts = split(haystack, token, keep_empty);
    for part in &parts {
        assert!(part.len() <= haystack.len());
        if !keep_empty {
            assert!(!part.is_empty());
        }
    }
    let copies = split_copy(haystack, token, keep_empty);
    assert!(copies.iter().map(Vec::as_slice).eq(parts.iter().copied()));

    let (head, tail) = split_first(haystack, token);
    assert!(head.len() + tail.len() <= haystack.len());
    assert_eq!(split_first_copy(haystack, token), (head.to_vec(), tail.to_vec()));

    // Replacing a token with itself changes nothing.
    assert_eq!(replace(haystack, token, token), haystack);

    let replaced = replace(haystack, token, replacement);
    if token.is_empty() {
        assert_eq!(replaced, haystack);
    } else {
        // Kept parts re-joined with the replacement text are exactly the
        // rewrite.
        let kept = split(haystack, token, true);
        assert_eq!(kept.join(replacement), replaced);
        if replacement.len() == token.len() {
            assert_eq!(replaced.len(), haystack.len());
        }
    }

    // Chunking: widths are respected and with no skip the chunks concatenate
    // back to the input.
    let width = usize::from(width);
    let skip = usize::from(skip);
    let chunks = chunk(haystack, width, skip);
    if width == 0 {
        assert!(chunks.is_empty());
    } else {
        assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= width));
        if skip == 0 {
            assert_eq!(chunks.concat(), haystack);
        }
    }
}

fuzz_target!(|ops: Ops<'_>| run(&ops));
